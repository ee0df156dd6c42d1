use lib::input::IStr;

use super::{checksum, find_sector, rotate, sector_sum, Room, RoomError};

fn room(s: &str) -> Room {
    s.parse().unwrap()
}

#[test]
fn test_parse() {
    assert_eq!(
        room("aaaaa-bbb-z-y-x-123[abxyz]"),
        Room {
            name: String::from("aaaaa-bbb-z-y-x"),
            sector_id: 123,
            checksum: String::from("abxyz"),
        }
    );
}

#[test]
fn test_is_real() {
    assert!(room("aaaaa-bbb-z-y-x-123[abxyz]").is_real());
    assert!(room("a-b-c-d-e-f-g-h-987[abcde]").is_real());
    assert!(room("not-a-real-room-404[oarel]").is_real());
    assert!(!room("totally-real-room-200[decoy]").is_real());
}

#[test]
fn test_checksum() {
    assert_eq!(checksum("aaaaabbbbcccc"), "abc");
    assert_eq!(checksum("zz-yy-xx-ww-vv-uu"), "uvwxy");
    assert_eq!(checksum("---"), "");
}

#[test]
fn test_decrypt() {
    assert_eq!(
        room("qzmt-zixmtkozy-ivhz-343[zimth]").decrypt(),
        "very encrypted name"
    );
}

#[test]
fn test_decrypt_round_trip() {
    for line in [
        "qzmt-zixmtkozy-ivhz-343[zimth]",
        "aaaaa-bbb-z-y-x-123[abxyz]",
        "not-a-real-room-404[oarel]",
        "mnqsgonkd-naidbs-rsnqzfd-27[ndsqa]",
    ] {
        let room = room(line);
        let back = rotate(&room.decrypt(), 26 - room.sector_id % 26);
        assert_eq!(back, room.name.replace('-', " "));
    }
}

#[test]
fn test_sectors() {
    let rooms = [
        "aaaaa-bbb-z-y-x-123[abxyz]",
        "a-b-c-d-e-f-g-h-987[abcde]",
        "not-a-real-room-404[oarel]",
        "totally-real-room-200[decoy]",
    ]
    .map(room);

    assert_eq!(sector_sum(&rooms), 1514);
    assert_eq!(find_sector(&rooms, "northpole object storage"), None);

    let mut rooms = rooms.to_vec();
    // Decoy with the right name is skipped.
    rooms.push(room("mnqsgonkd-naidbs-rsnqzfd-53[decoy]"));
    rooms.push(room("mnqsgonkd-naidbs-rsnqzfd-27[ndsqa]"));
    assert_eq!(sector_sum(&rooms), 1514 + 27);
    assert_eq!(find_sector(&rooms, "northpole object storage"), Some(27));
}

#[test]
fn test_sector_sum_is_wide() {
    let rooms = [room("a-4000000000[a]"), room("b-4000000000[b]")];
    assert_eq!(sector_sum(&rooms), 8_000_000_000);
}

#[test]
fn test_rotate() {
    assert_eq!(rotate("abc-xyz", 0), "abc xyz");
    assert_eq!(rotate("abc-xyz", 27), "bcd yza");
    assert_eq!(rotate("Zz9", 1), "Aa9");

    let text = "hello";
    assert_eq!(rotate(&rotate(text, 10), 16), text);
}

#[test]
fn test_parse_errors() {
    fn err(s: &str) -> RoomError {
        s.parse::<Room>().unwrap_err()
    }

    assert!(matches!(err("abc-123"), RoomError::MissingChecksum));
    assert!(matches!(err("abc123[abc]"), RoomError::MissingDash));
    assert!(matches!(err("-123[abc]"), RoomError::EmptyName));
    assert!(matches!(err("abc-12x[abc]"), RoomError::BadSectorId(..)));
    assert!(matches!(err("abc-[abc]"), RoomError::BadSectorId(..)));
    assert!(matches!(err("abc-123[abc"), RoomError::MissingBracket));
    assert!(matches!(err("abc-123[]"), RoomError::ChecksumLength(0)));
    assert!(matches!(err("abc-123[abcdef]"), RoomError::ChecksumLength(6)));
}

#[test]
fn test_from_input() {
    let mut input = IStr::new(b"a-b-1[ab]\nbroken\n", 0);

    let first = input.try_line::<Room>().unwrap().unwrap();
    assert_eq!(first.sector_id, 1);

    let error = input.try_line::<Room>().unwrap_err();
    assert_eq!(error.span(), 10..16);
}
