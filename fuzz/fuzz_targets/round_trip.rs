#![no_main]
use basic_url::{Components, Url};
use libfuzzer_sys::fuzz_target;

fn is_lowercase(s: &str) -> bool {
    s.to_lowercase() == s
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

fuzz_target!(|data: (Vec<String>, String, String, String, String, String)| {
    let (segments, fragment, user, password, key, value) = data;
    if !segments.iter().all(|s| is_lowercase(s))
        || ![&fragment, &user, &password, &key, &value]
            .into_iter()
            .all(|s| is_lowercase(s))
    {
        return;
    }

    let mut url = Url::new(Components {
        protocol: Some("fuzz".to_owned()),
        host: Some("example.com".to_owned()),
        ..Components::default()
    })
    .unwrap();
    if url.set_path_segments(segments).is_err() {
        return;
    }
    url.set_fragment(non_empty(&fragment)).unwrap();
    url.set_user(non_empty(&user)).unwrap();
    url.set_password(non_empty(&password)).unwrap();
    url.params_mut().insert(key, value.into());

    let s = url.to_canonical_string().unwrap();
    let reparsed = Url::parse(&s).unwrap();
    assert_eq!(reparsed, url);
});
