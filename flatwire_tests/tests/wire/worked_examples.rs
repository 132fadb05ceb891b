use anyhow::Result;
use flatwire_types::serde::{
    composite, error_kind, Codec, Datum, ErrorKind, FixedWidthInt, LengthPrefixedList,
    LengthPrefixedString, Schema, TypeDesc, Width,
};
use std::io::Cursor;

pub fn test_worked_examples() -> Result<()> {
    scalars()?;
    composite_ordering()?;
    declared_count_over_trailing_bytes()?;
    range_errors_write_nothing()?;
    Ok(())
}

fn scalars() -> Result<()> {
    assert_eq!(FixedWidthInt::from(Width::Byte).ser_solo(&42)?, [0x2a]);
    assert_eq!(FixedWidthInt::from(Width::Short).ser_solo(&1234)?, [0x04, 0xd2]);
    assert_eq!(
        LengthPrefixedString.ser_solo(&String::from("ab"))?,
        [0x00, 0x02, 0x61, 0x62]
    );

    assert_eq!(TypeDesc::Int(Width::Byte).ser_solo(&Datum::from(42u8))?, [0x2a]);
    assert_eq!(
        TypeDesc::Str.deser_solo(&[0x00, 0x02, 0x61, 0x62])?,
        Datum::from("ab")
    );
    Ok(())
}

fn composite_ordering() -> Result<()> {
    let pairs = vec![
        (TypeDesc::Int(Width::Long), Datum::from(123456789u64)),
        (
            TypeDesc::list_of(TypeDesc::Str),
            Datum::list(["one", "two", "three"]),
        ),
        (TypeDesc::Int(Width::Byte), Datum::from(99u8)),
    ];

    let mut act: Vec<u8> = vec![];
    let w_len = composite::ser_pairs(pairs.iter().map(|(t, d)| (t, d)), &mut act)?;

    let exp: Vec<u8> = [
        &[0, 0, 0, 0, 0x07, 0x5b, 0xcd, 0x15][..],
        &[0, 0, 0, 3][..],
        &[0, 3][..],
        &b"one"[..],
        &[0, 3][..],
        &b"two"[..],
        &[0, 5][..],
        &b"three"[..],
        &[99][..],
    ]
    .concat();
    assert_eq!(act, exp);
    assert_eq!(*w_len, exp.len());

    let schema = Schema::new()
        .field("one", Width::Long)
        .field("two", TypeDesc::list_of(TypeDesc::Str))
        .field("three", Width::Byte);
    let (r_len, fields) = composite::deser_fields(&schema, &mut Cursor::new(&act))?;
    assert_eq!(r_len, exp.len());
    assert_eq!(
        fields,
        pairs.into_iter().map(|(_, dat)| dat).collect::<Vec<_>>()
    );
    Ok(())
}

fn declared_count_over_trailing_bytes() -> Result<()> {
    let codec = LengthPrefixedList::new(FixedWidthInt::from(Width::Short));
    let buf: [u8; 10] = [0, 0, 0, 2, 0, 1, 0, 2, 0, 3];

    let mut r = Cursor::new(&buf[..]);
    let (r_len, elems) = codec.deser(&mut r)?;
    assert_eq!(elems, vec![1, 2]);
    assert_eq!(r_len, 8);
    assert_eq!(r.position(), 8);

    let err = codec.deser_solo(&buf).unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::Decode), "{err:?}");
    Ok(())
}

fn range_errors_write_nothing() -> Result<()> {
    for width in Width::ALL {
        let desc = TypeDesc::Int(width);
        let too_big = i128::from(width.max_value()) + 1;
        for bad in [Datum::Int(-1), Datum::Int(too_big)] {
            let mut w: Vec<u8> = vec![];
            let err = desc.ser(&bad, &mut w).unwrap_err();
            assert_eq!(error_kind(&err), Some(ErrorKind::Range), "{err:?}");
            assert!(w.is_empty());
        }
        assert_eq!(desc.ser_solo(&Datum::Int(0))?, vec![0u8; width.bytes()]);
        assert_eq!(
            desc.ser_solo(&Datum::from(width.max_value()))?,
            vec![0xffu8; width.bytes()]
        );
    }
    Ok(())
}
