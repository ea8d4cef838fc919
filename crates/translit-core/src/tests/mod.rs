
use crate::tables::TableStore;
use crate::Standard;

/// Letters whose GOST spelling cannot collide with a neighbour's during the
/// reverse rewrite pass and contains no backtick. `Ы` (+`А/О/У` reads as
/// `Я/Ё/Ю`) and the backtick letters `Ь`, `Ъ`, `Э` are covered by fixed cases:
/// backtick runs merge, and a backtick breaks a title-case word.
const GOST_SAFE_LETTERS: &str = "АБВГДЕЁЖЗИЙКЛМНОПРСТУФХЦЧШЩЮЯ";

fn gost_forward(line: &str) -> String {
    crate::transliterate_direct(TableStore::global(), line, Standard::Gost, "ru").unwrap()
}

fn gost_reverse(line: &str) -> String {
    crate::transliterate_inverse(TableStore::global(), line, Standard::Gost, "ru").unwrap()
}

#[test]
fn gost_roundtrip_fixed_words() {
    for word in [
        "мышь", "семья", "объект", "подъезд", "Щука", "ЭХО", "съёмка", "вьюга", "Шёлк",
        "ЧАЩА", "Жизнь", "цыплёнок", "выход", "рыба", "этот", "ПОЭТ",
    ] {
        assert_eq!(gost_reverse(&gost_forward(word)), word, "{word}");
    }
}

#[test]
fn gost_known_collisions() {
    // Ы followed by А is spelled YA and read back as Я.
    assert_eq!(gost_forward("ЫА"), "YA");
    assert_eq!(gost_reverse("YA"), "Я");
    // Two soft signs merge into a hard sign.
    assert_eq!(gost_reverse(&gost_forward("ЬЬ")), "Ъ");
}

#[test]
fn concurrent_calls_share_the_store() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(|| gost_forward("Москва Россия")))
        .collect();
    for h in handles {
        assert_eq!(h.join().unwrap(), "Moskva Rossiya");
    }
}
