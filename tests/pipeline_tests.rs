//! End-to-end tests: parse → normalize → serialize.

use urlnorm::*;

#[test]
fn test_normalize_end_to_end() {
    let test_cases = vec![
        ("HtTp://spHela.com", "http://sphela.com/"),
        ("HtTp://spHela.com:80/foo?baz=moo", "http://sphela.com/foo?baz=moo"),
        (
            "HTTps://www.EXAMPLE.COM/%2d%aD/MOO#smoo",
            "https://www.example.com/-%AD/MOO#smoo",
        ),
        (
            "HTTps://www.EXAMPLE.COM/%2d%aD/?MO=O%20smoo",
            "https://www.example.com/-%AD/?MO=O%20smoo",
        ),
        (
            "HTTps://www.EXAMPLE.COM/%2d%aD/?MO=O+smoo",
            "https://www.example.com/-%AD/?MO=O+smoo",
        ),
        (
            "HTTps://www.EXAMPLE.COM/%2d%aD/?MO=O smoo",
            "https://www.example.com/-%AD/?MO=O%20smoo",
        ),
        (
            "http://apphacker.com/moo/../doo/./baz/",
            "http://apphacker.com/doo/baz/",
        ),
        (
            "http://apphacker.com/moo//doo//baz/",
            "http://apphacker.com/moo/doo/baz/",
        ),
        ("http://www.apphacker.com?", "http://www.apphacker.com/"),
        (
            "http://www.apphacker.com?boo=fuzz",
            "http://www.apphacker.com/?boo=fuzz",
        ),
        ("http://apphacker.com/?", "http://apphacker.com/"),
        ("http://apphacker.com/?%foo=bar", "http://apphacker.com/?%foo=bar"),
    ];

    for (input, expected) in test_cases {
        let mut record = UrlRecord::parse(input).unwrap();
        normalize(&mut record).unwrap();
        assert_eq!(
            record.to_url_string(),
            expected,
            "Normalization failed for: {}",
            input
        );
    }
}

#[test]
fn test_normalize_ipv6_hosts_assembled_literally() {
    // Unbracketed IPv6-with-port authorities do not survive a strict URL
    // parser; assemble the records directly.
    let mut record = UrlRecord::new("http", "2001:0db8:85a3:0000:0000:8a2e:0370:7334:80");
    record.path = "/path/tostuff".to_string();
    normalize(&mut record).unwrap();
    assert_eq!(
        record.to_url_string(),
        "http://2001:0db8:85a3:0000:0000:8a2e:0370:7334/path/tostuff"
    );

    let mut record = UrlRecord::new("http", "2001:0db8:85a3:0000:0000:8a2e:0370:80");
    record.path = "/path/tostuff".to_string();
    normalize(&mut record).unwrap();
    assert_eq!(
        record.to_url_string(),
        "http://2001:0db8:85a3:0000:0000:8a2e:0370:80/path/tostuff"
    );
}

#[test]
fn test_normalize_is_idempotent() {
    let inputs = vec![
        "HtTp://spHela.com",
        "HTTps://www.EXAMPLE.COM/%2d%aD/?MO=O smoo",
        "http://apphacker.com/moo/../doo/./baz/",
        "http://apphacker.com/moo//doo//baz/",
        "http://apphacker.com/?%foo=bar",
    ];

    for input in inputs {
        let mut record = UrlRecord::parse(input).unwrap();
        normalize(&mut record).unwrap();
        let once = record.clone();
        normalize(&mut record).unwrap();
        assert_eq!(record, once, "Pipeline not idempotent for: {}", input);
    }
}

#[test]
fn test_normalize_case_invariance() {
    let mut upper = UrlRecord::parse("HTTP://SPHELA.COM/Path").unwrap();
    let mut lower = UrlRecord::parse("http://sphela.com/Path").unwrap();

    normalize(&mut upper).unwrap();
    normalize(&mut lower).unwrap();

    assert_eq!(upper, lower);
    // Path case is data and survives.
    assert_eq!(upper.path, "/Path");
}

#[test]
fn test_normalize_segment_limit_propagates() {
    let mut record = UrlRecord::parse("http://sphela.com/a/b/c/d/e").unwrap();
    let result = Pipeline::new().segment_limit(3).run(&mut record);

    assert_eq!(result, Err(NormalizeError::SegmentLimitExceeded { limit: 3 }));
}

#[test]
fn test_semantic_transforms_compose_with_pipeline() {
    let mut record =
        UrlRecord::parse("HTTP://www.Apphacker.com/a/index.html?zar=bar&atari=this#moo").unwrap();

    normalize(&mut record).unwrap();
    normalize_www(&mut record, false);
    remove_directory_index(&mut record, "index.html");
    sort_query(&mut record);
    remove_fragment(&mut record);

    assert_eq!(
        record.to_url_string(),
        "http://apphacker.com/a/?atari=this&zar=bar"
    );
}
