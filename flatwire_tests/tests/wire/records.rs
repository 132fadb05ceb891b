use super::helpers::{gen_batch, Batch, Reading};
use anyhow::Result;
use flatwire_types::serde::{error_kind, Codec, Datum, ErrorKind};
use flatwire_types::types::{Deser, Record, RecordCodec, Ser};

pub fn test_records() -> Result<()> {
    nested_records()?;
    typed_and_dynamic_agree()?;
    malformed_input()?;
    Ok(())
}

fn nested_records() -> Result<()> {
    for readings_ct in [0, 1, 5] {
        let batch = gen_batch(42, readings_ct);
        let buf = batch.ser_solo()?;
        assert_eq!(buf.len(), RecordCodec::<Batch>::new().measure(&batch)?);
        assert_eq!(Batch::deser_solo(&buf)?, batch);
    }
    Ok(())
}

fn typed_and_dynamic_agree() -> Result<()> {
    let batch = gen_batch(7, 3);
    let typed = batch.ser_solo()?;
    let dynamic = Batch::type_desc().ser_solo(&batch.to_datum())?;
    assert_eq!(typed, dynamic);

    let dat = Batch::type_desc().deser_solo(&typed)?;
    assert_eq!(Batch::from_datum(dat)?, batch);
    Ok(())
}

fn malformed_input() -> Result<()> {
    let buf = gen_batch(9, 2).ser_solo()?;

    let err = Batch::deser_solo(&buf[..buf.len() - 1]).unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::Truncation), "{err:?}");

    let mut padded = buf.clone();
    padded.push(0);
    let err = Batch::deser_solo(&padded).unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::Decode), "{err:?}");

    let err = Reading::from_datum(Datum::list([1u8])).unwrap_err();
    assert_eq!(error_kind(&err), Some(ErrorKind::Shape), "{err:?}");
    Ok(())
}
