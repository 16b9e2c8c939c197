//! Run: cargo run --release
//! Prints how many `Cookie` headers per second one thread can parse.
use request_cookies::RequestCookieCollection;
use std::time::{Duration, Instant};

fn main() {
    let line = (0..20)
        .map(|n| format!("cookie_{n}=value%20{n}"))
        .collect::<Vec<String>>()
        .join("; ");
    for num_lines in [1, 4] {
        let lines: Vec<&str> = std::iter::repeat_n(line.as_str(), num_lines).collect();
        let deadline = Instant::now() + Duration::from_secs(2);
        let mut count: u64 = 0;
        let mut num_entries = 0;
        while Instant::now() < deadline {
            for _ in 0..1000 {
                num_entries += RequestCookieCollection::parse(&lines, true).len();
            }
            count += 1000;
        }
        println!(
            "{num_lines} line(s) of {} bytes: {} parses/sec, {num_entries} entries",
            line.len(),
            count / 2
        );
    }
}
