use super::helpers::{gen_batch, Batch};
use anyhow::Result;
use flatwire_types::iters::{ValueReader, ValueWriter};
use flatwire_types::serde::{error_kind, ErrorKind};
use flatwire_types::types::{ReadResult, RecordCodec};
use rand::Rng;
use std::io::Cursor;

pub fn test_streams() -> Result<()> {
    let mut rng = rand::thread_rng();
    let batches = (0..50u64)
        .map(|seq| gen_batch(seq, rng.gen_range(0..4)))
        .collect::<Vec<_>>();

    let buf = {
        let mut w = ValueWriter::new(vec![], RecordCodec::<Batch>::new());
        for batch in batches.iter() {
            w.put(batch)?;
        }
        w.into_inner()?
    };

    /* Iterate everything. */
    let r = ValueReader::new(Cursor::new(&buf), RecordCodec::<Batch>::new());
    let read_back = r.into_iter_values().collect::<Result<Vec<_>>>()?;
    assert_eq!(read_back, batches);

    /* Skip every other batch. */
    let mut r = ValueReader::new(Cursor::new(&buf), RecordCodec::<Batch>::new());
    for batch in batches.chunks(2) {
        assert!(matches!(r.skip_next()?, ReadResult::Some(_, ())));
        match (r.deser_next()?, batch.get(1)) {
            (ReadResult::Some(_, act), Some(exp)) => assert_eq!(&act, exp),
            (ReadResult::EOF, None) => {}
            (act, exp) => panic!("{act:?} vs {exp:?}"),
        }
    }
    assert_eq!(r.deser_next()?, ReadResult::EOF);
    assert_eq!(r.offset(), buf.len() as u64);

    /* Cut the last batch short. */
    let cut = &buf[..buf.len() - 1];
    let r = ValueReader::new(Cursor::new(cut), RecordCodec::<Batch>::new());
    let results = r.into_iter_values().collect::<Vec<_>>();
    assert_eq!(results.len(), batches.len());
    let err = results.last().unwrap().as_ref().unwrap_err();
    assert_eq!(error_kind(err), Some(ErrorKind::Truncation), "{err:?}");

    Ok(())
}
