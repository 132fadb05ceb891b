use crate::{iters::ValueReader, serde::Codec, types::ReadResult};
use anyhow::Result;
use std::io::Read;

enum State {
    Reading,
    Terminated,
}

/// Yields values until the stream ends cleanly.
/// After the first error, the iterator is exhausted.
pub struct ValueIterator<R, C> {
    r: ValueReader<R, C>,
    state: State,
}

impl<R, C> From<ValueReader<R, C>> for ValueIterator<R, C> {
    fn from(r: ValueReader<R, C>) -> Self {
        Self {
            r,
            state: State::Reading,
        }
    }
}

impl<R, C> ValueIterator<R, C>
where
    R: Read,
    C: Codec,
{
    fn next_impl(&mut self) -> Result<Option<C::Value>> {
        match self.state {
            State::Reading => match self.r.deser_next() {
                Ok(ReadResult::Some(_r_len, value)) => Ok(Some(value)),
                Ok(ReadResult::EOF) => {
                    self.state = State::Terminated;
                    Ok(None)
                }
                Err(e) => {
                    self.state = State::Terminated;
                    Err(e)
                }
            },
            State::Terminated => Ok(None),
        }
    }
}

impl<R, C> Iterator for ValueIterator<R, C>
where
    R: Read,
    C: Codec,
{
    type Item = Result<C::Value>;
    fn next(&mut self) -> Option<Self::Item> {
        self.next_impl().transpose()
    }
}
