use fact_values::{fact, to_string_as, ArrayValue, Format, IntegerValue, StringValue};

fn main() {
    let value = fact!(["1", 2, ["child"]]);

    for format in [Format::Text, Format::Json, Format::PrettyJson, Format::Yaml] {
        match to_string_as(&value, format) {
            Ok(rendered) => println!("== {}\n{}\n", format, rendered),
            Err(err) => eprintln!("{} rendering failed: {}", format, err),
        }
    }

    if let Some(array) = value.as_array() {
        println!("first as string:  {:?}", array.get::<StringValue>(0).map(|s| s.value()));
        println!("second as integer: {:?}", array.get::<IntegerValue>(1).map(|i| i.value()));
        println!("first as array:   {:?}", array.get::<ArrayValue>(0));
    }
}
