use super::*;

#[test]
fn map_embed_url_encodes_address_line() {
    let address = Address {
        detail: "1 A".to_owned(),
        ward: "B".to_owned(),
        district: "C".to_owned(),
        city: "D".to_owned(),
    };
    assert_eq!(
        map_embed_url(&address),
        "https://maps.google.com/maps?q=1%20A%2C%20B%2C%20C%2C%20D&z=15&output=embed"
    );
}

#[test]
fn map_embed_url_encodes_non_ascii() {
    let address = Address { detail: "Lê".to_owned(), ..Address::default() };
    assert!(map_embed_url(&address).starts_with("https://maps.google.com/maps?q=L%C3%AA%2C%20"));
}

#[test]
fn map_embed_url_for_blank_address_still_builds() {
    assert_eq!(
        map_embed_url(&Address::default()),
        "https://maps.google.com/maps?q=%2C%20%2C%20%2C%20&z=15&output=embed"
    );
}
