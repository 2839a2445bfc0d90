//! Pack parsing and generation tests.

use ringdeal::{CARDS_PER_PLAYER, Pack, PackError};

fn lines(values: &[i64]) -> String {
    values.iter().map(|v| format!("{v}\n")).collect()
}

#[test]
fn parses_trimmed_lines_and_skips_blanks() {
    let mut text = lines(&[1, 2, 3, 4, 5, 6, 7, 8, 8, 7, 6, 5, 4, 3, 2]);
    text.push_str("\n   \n  1  \n");

    let pack = Pack::parse(&text, 2).unwrap();
    assert_eq!(pack.len(), 16);
    assert_eq!(pack.values()[15], 1);
}

#[test]
fn rejects_wrong_length() {
    let err = Pack::parse(&lines(&[1; 15]), 2).unwrap_err();
    assert!(matches!(
        err,
        PackError::WrongLength {
            expected: 16,
            found: 15
        }
    ));
}

#[test]
fn rejects_negative_and_garbage() {
    let mut values = vec![1; 16];
    values[3] = -4;
    let err = Pack::parse(&lines(&values), 2).unwrap_err();
    assert!(matches!(err, PackError::Negative { line: 4, value: -4 }));

    let err = Pack::parse("1\n2\nthree\n", 2).unwrap_err();
    match err {
        PackError::InvalidValue { line, token } => {
            assert_eq!(line, 3);
            assert_eq!(token, "three");
        }
        other => panic!("unexpected error: {other}"),
    }

    let err = Pack::parse("99999999999\n", 2).unwrap_err();
    assert!(matches!(err, PackError::InvalidValue { line: 1, .. }));
}

#[test]
fn rejects_single_player() {
    let err = Pack::parse(&lines(&[1; 8]), 1).unwrap_err();
    assert!(matches!(err, PackError::TooFewPlayers(1)));
}

#[test]
fn generated_pack_is_seeded_and_winnable() {
    let a = Pack::generate(5, 11);
    let b = Pack::generate(5, 11);
    assert_eq!(a, b);
    assert_eq!(a.len(), 5 * CARDS_PER_PLAYER);

    let mut values = a.values();
    values.sort_unstable();
    let expected: Vec<u32> = (1..=5)
        .flat_map(|v| std::iter::repeat_n(v, CARDS_PER_PLAYER))
        .collect();
    assert_eq!(values, expected);
}

#[test]
fn display_round_trips_through_parse() {
    let pack = Pack::generate(3, 2);
    assert_eq!(Pack::parse(&pack.to_string(), 3).unwrap(), pack);
}

#[test]
fn reads_and_writes_files() {
    let dir = std::env::temp_dir().join(format!("ringdeal-pack-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("four.txt");

    let pack = Pack::generate(4, 9);
    pack.write(&path).unwrap();
    assert_eq!(Pack::read(&path, 4).unwrap(), pack);
    assert!(matches!(
        Pack::read(&path, 3),
        Err(PackError::WrongLength { .. })
    ));
    assert!(matches!(
        Pack::read(&dir.join("missing.txt"), 4),
        Err(PackError::Io(_))
    ));

    std::fs::remove_dir_all(&dir).unwrap();
}
