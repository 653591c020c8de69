use fact_values::{
    fact, FactFormatter, FilterToken, JsonFormatter, LegacyFormatter, ResolvedFact, Value,
    YamlFormatter,
};

fn main() {
    let facts = vec![
        ResolvedFact::new("kernel", Some(Value::from("Linux"))),
        ResolvedFact::new("os.family", Some(Value::from("RedHat"))),
        ResolvedFact::new("os.release", Some(fact!({"full": "39", "major": "39"}))),
        ResolvedFact::new("networking.ip6", Some(Value::from("fe80::7ca0:ab22:703a:b329"))),
        ResolvedFact::new("virtual", None),
    ];

    println!("== legacy\n{}\n", LegacyFormatter.format(&facts).unwrap_or_default());
    println!("== json\n{}\n", JsonFormatter::pretty().format(&facts).unwrap_or_default());
    println!("== yaml\n{}", YamlFormatter::default().format(&facts).unwrap_or_default());

    let queried = vec![
        ResolvedFact::new("os", Some(fact!({"release": {"major": "39"}})))
            .with_query("os.release.major")
            .with_filter_tokens(vec![FilterToken::key("release"), FilterToken::key("major")]),
        ResolvedFact::new("virtual", None).with_query("virtual"),
    ];
    println!("== legacy, two queries\n{}", LegacyFormatter.format(&queried).unwrap_or_default());
}
