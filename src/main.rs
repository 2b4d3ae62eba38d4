use std::collections::HashMap;

fn main() {
    println!("urlnorm walkthrough");
    println!("===================");

    // Full syntactic pipeline
    println!("\n1. Syntactic normalization:");
    let test_urls = vec![
        "HtTp://spHela.com",
        "HtTp://spHela.com:80/foo?baz=moo",
        "HTTps://www.EXAMPLE.COM/%2d%aD/MOO#smoo",
        "http://apphacker.com/moo//doo//baz/",
    ];

    for test_url in test_urls {
        println!("  {}", test_url);
        match urlnorm::UrlRecord::parse(test_url) {
            Ok(mut record) => match urlnorm::normalize(&mut record) {
                Ok(()) => println!("    → {}", record.to_url_string()),
                Err(e) => println!("    ✗ Error: {}", e),
            },
            Err(e) => println!("    ✗ Parse error: {}", e),
        }
    }

    // Dot-segment resolution on a literally assembled record
    println!("\n2. Dot-segment resolution:");
    let mut record = urlnorm::UrlRecord::new("http", "apphacker.com");
    record.path = "/moo/../doo/./baz/".to_string();
    urlnorm::resolve_dot_segments(&mut record, urlnorm::DEFAULT_SEGMENT_LIMIT).unwrap();
    println!("  /moo/../doo/./baz/ → {}", record.path);

    let mut record = urlnorm::UrlRecord::new("http", "apphacker.com");
    record.path = "/a/b/c".to_string();
    match urlnorm::resolve_dot_segments(&mut record, 2) {
        Ok(()) => println!("  ✗ Limit of 2 unexpectedly allowed /a/b/c"),
        Err(e) => println!("  /a/b/c with limit 2 ✓ rejected: {}", e),
    }

    // Default-port elision and the IPv6 guard
    println!("\n3. Default-port elision:");
    let test_hosts = vec![
        "sphela.com:80",
        "2001:0db8:85a3:0000:0000:8a2e:0370:7334:80",
        "2001:0db8:85a3:0000:0000:8a2e:0370:80",
    ];

    for host in test_hosts {
        let mut record = urlnorm::UrlRecord::new("http", host);
        urlnorm::remove_default_port(&mut record);
        println!("  {} → {}", host, record.host);
    }

    // Query transforms
    println!("\n4. Query transforms:");
    let mut record =
        urlnorm::UrlRecord::parse("http://gogl.net/?zar=bar&foo=bar&atari=this").unwrap();
    let defaults: HashMap<String, String> = [("foo".to_string(), "bar".to_string())].into();
    urlnorm::remove_default_query_values(&mut record, &defaults);
    urlnorm::sort_query(&mut record);
    println!("  zar=bar&foo=bar&atari=this → {}", record.query_string());

    // www toggling skips IP literals
    println!("\n5. www toggling:");
    let test_hosts = vec!["gogl.net", "www.gogl.net", "74.125.224.49"];
    for host in test_hosts {
        let mut record = urlnorm::UrlRecord::new("http", host);
        urlnorm::normalize_www(&mut record, true);
        println!("  show www: {} → {}", host, record.host);
    }

    // Directory index removal
    println!("\n6. Directory index removal:");
    let mut record = urlnorm::UrlRecord::parse("http://gogl.net/a/b/index.html").unwrap();
    urlnorm::remove_directory_index(&mut record, "index.html");
    println!("  /a/b/index.html → {}", record.path);
}
