use fact_values::{
    fact, to_json_string, to_text_string, to_yaml_string, ArrayValue, BooleanValue, DoubleValue,
    Kind, MapValue, StringValue, Value,
};
use pretty_assertions::assert_eq;

fn networking() -> Value {
    fact!({
        "hostname": "web01",
        "mtu": 1500,
        "dhcp": false,
        "load": 0.75,
        "interfaces": {
            "lo": {"ip": "127.0.0.1"},
            "eth0": {"ip": "10.0.0.5", "ip6": "fe80::1"}
        },
        "dns": ["1.1.1.1", "8.8.8.8"]
    })
}

#[test]
fn test_typed_access() {
    let value = networking();
    let map = value.as_map().unwrap();

    assert_eq!(map.len(), 6);
    assert_eq!(
        map.get::<StringValue>("hostname").map(|s| s.value().as_str()),
        Some("web01")
    );
    assert_eq!(map.get::<BooleanValue>("dhcp").map(|b| *b.value()), Some(false));
    assert_eq!(map.get::<DoubleValue>("load").map(|d| *d.value()), Some(0.75));
    assert_eq!(map.get::<ArrayValue>("dns").map(ArrayValue::len), Some(2));

    assert!(map.get::<MapValue>("hostname").is_none());
    assert!(map.get::<StringValue>("nope").is_none());
    assert_eq!(map.value("interfaces").map(Value::kind), Some(Kind::Map));
}

#[test]
fn test_text() {
    assert_eq!(
        to_text_string(&networking()),
        "{ hostname => web01, mtu => 1500, dhcp => false, load => 0.75, \
         interfaces => { lo => { ip => 127.0.0.1 }, eth0 => { ip => 10.0.0.5, ip6 => fe80::1 } }, \
         dns => [ 1.1.1.1, 8.8.8.8 ] }"
    );
}

#[test]
fn test_json() {
    assert_eq!(
        to_json_string(&networking()).unwrap(),
        r#"{"hostname":"web01","mtu":1500,"dhcp":false,"load":0.75,"interfaces":{"lo":{"ip":"127.0.0.1"},"eth0":{"ip":"10.0.0.5","ip6":"fe80::1"}},"dns":["1.1.1.1","8.8.8.8"]}"#
    );
}

#[test]
fn test_yaml() {
    let expected = "\
hostname: \"web01\"
mtu: 1500
dhcp: false
load: 0.75
interfaces:
  lo:
    ip: \"127.0.0.1\"
  eth0:
    ip: \"10.0.0.5\"
    ip6: \"fe80::1\"
dns:
  - \"1.1.1.1\"
  - \"8.8.8.8\"
";
    assert_eq!(to_yaml_string(&networking()), expected);
}

#[test]
fn test_yaml_parses_back_to_same_data() {
    let value = networking();
    let parsed: serde_json::Value = serde_yaml::from_str(&to_yaml_string(&value)).unwrap();
    assert_eq!(parsed, value.to_json());
}

#[test]
fn test_quoted_strings_stay_strings_in_yaml() {
    let value = fact!({"version": "1.10", "enabled": "true", "count": "007"});
    let parsed: serde_json::Value = serde_yaml::from_str(&to_yaml_string(&value)).unwrap();
    assert_eq!(parsed, value.to_json());
}

#[test]
fn test_awkward_keys_round_trip_through_yaml() {
    let value = fact!({"no": 1, "with space": 2, "": 3, "a:b": 4});
    let yaml = to_yaml_string(&value);
    assert_eq!(yaml, "\"no\": 1\n\"with space\": 2\n\"\": 3\n\"a:b\": 4\n");

    let parsed: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, value.to_json());
}

#[test]
fn test_serde_serialize_agrees_with_json_builder() {
    let value = networking();
    assert_eq!(serde_json::to_value(&value).unwrap(), value.to_json());

    let yaml = serde_yaml::to_string(&value).unwrap();
    let parsed: serde_json::Value = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(parsed, value.to_json());
}

#[test]
fn test_dropping_container_moves_whole_subtree() {
    let inner = MapValue::from_iter(vec![("k".to_string(), Value::from("v"))]);
    let outer = ArrayValue::new(vec![Value::from(inner)]);
    let moved = outer;
    assert_eq!(moved.get::<MapValue>(0).map(MapValue::len), Some(1));
}
