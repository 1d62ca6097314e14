//! Demonstrate date finding, parsing and rendering

use schema_formats::date::{find_date, format_date, parse_date, DateFormatOptions};

fn main() {
    println!("=== Date Handling Demo ===\n");

    let test_cases = vec![
        "",
        "2024-11-20",
        "11/20/2024",
        "Invoice 20241120-007",
        "05-11-23",
        "23.11.05",
        "due 2024_2_30",
        "next Tuesday",
    ];

    let display = DateFormatOptions::with_format("DDDD, MMMM DS YYYY");

    for text in test_cases {
        println!("Input: {:?}", text);

        match find_date(text) {
            Some(found) => println!("  Found: {}", found),
            None => println!("  Found: (nothing)"),
        }

        match parse_date(text) {
            Some(date) => {
                println!("  Parsed: {}", date);
                if let Some(rendered) = format_date(date, &display) {
                    println!("  Rendered: {}", rendered);
                }
            }
            None => println!("  Parsed: (no date)"),
        }
        println!();
    }
}
