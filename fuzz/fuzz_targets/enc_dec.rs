#![no_main]
use basic_url::{pct_enc, query, ParamValue, Params};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: (&str, Vec<String>)| {
    let (s, values) = data;
    let encoded = pct_enc::encode(s);
    assert_eq!(pct_enc::decode(&encoded).unwrap(), s);

    let mut params = Params::new();
    params.insert(s.to_owned(), ParamValue::Array(values));
    params.insert(format!("{s}_"), s.into());
    if params.values().any(|v| v.as_array().is_some_and(|a| a.is_empty())) {
        return;
    }
    assert_eq!(query::decode(&query::encode(&params)).unwrap(), params);
});
