use lazy_stream::stream;
use lazy_stream::MetricsConfig;

fn main() {
    let words: Vec<String> = ["udinic", "", "", "snap"].iter().map(|w| w.to_string()).collect();

    let (source, metrics) = stream::from(&words).with_metrics(MetricsConfig::new().label("words"));
    let letters = source
        .flat_map(|w| stream::from_generator(w.chars().collect::<Vec<_>>()))
        .filter(|c| c.is_alphabetic())
        .map(|c| c.to_ascii_uppercase());

    println!("before traversal: {:?}", metrics.snapshot());

    letters.for_each(|c| print!("{}", c));
    println!();

    println!("after traversal: {:?}", metrics.snapshot());
}
