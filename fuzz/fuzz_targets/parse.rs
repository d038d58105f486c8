#![no_main]
use basic_url::Url;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let Ok(url) = Url::parse(data) else {
        return;
    };
    let Ok(s) = url.to_canonical_string() else {
        assert!(url.protocol().is_none() || url.host().is_none());
        return;
    };
    // Parsing lowercases its input, so only lowercase output is stable.
    if s.to_lowercase() != s {
        return;
    }
    let reparsed = Url::parse(&s).unwrap();
    assert_eq!(reparsed.to_canonical_string().unwrap(), s);
});
