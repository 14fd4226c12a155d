use twitter_text::{Extractor, Validator};

fn main() {
    let extractor = Extractor::new();
    let text = "＠alice RT@bob: café #Rust #café http://example.com/wiki/Primer_(film), see @rust/lists";

    for entity in extractor.extract_entities_with_indices(text) {
        println!(
            "{:<14} {:>8} {}",
            entity.kind(),
            entity.span().to_string(),
            entity.value()
        );
        for (name, value) in entity.fields() {
            println!("{:>24} = {value}", name);
        }
    }
    assert_eq!(extractor.extract_reply_screenname(text).as_deref(), Some("alice"));

    let validator = Validator::new();
    for url in ["http://例子.测试", "http://example.com:99999", "ftp://example.com"] {
        println!(
            "{url}: unicode {}, ascii {}",
            validator.is_valid_url(url),
            validator.is_valid_ascii_url(url)
        );
    }
    // Usernames are at most 20 characters
    assert!(!validator.is_valid_username("@abcdefghijklmnopqrstuvwxyz"));
}
