// Prints the conversion of each argument, or of a sample list.
// Run with: cargo run --bin translit -- ami bangla
use ime_core::Transliterator;

const SAMPLES: &[&str] = &[
    "o", "a", "i", "I", "u", "U", "rri", "e", "oi", "O", "ou",
    "k", "kh", "ka", "ko", "ki", "kou", "kkh", "shkr", "prem",
    "ami", "bangla", "tumi", "bhalo", "Thikana", "2025", "$10",
];

fn main() {
    let transliterator = Transliterator::bengali();
    let args: Vec<String> = std::env::args().skip(1).collect();

    let words: Vec<&str> = if args.is_empty() {
        SAMPLES.to_vec()
    } else {
        args.iter().map(String::as_str).collect()
    };
    for roman in words {
        println!("{} => {}", roman, transliterator.convert(roman));
    }
}
