use anyhow::Result;
use flatwire_types::serde::{Datum, Schema, TypeDesc, Width};
use flatwire_types::types::{take_fields, Record};

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Reading {
    pub sensor: String,
    pub samples: Vec<u32>,
}

impl Record for Reading {
    fn schema() -> Schema {
        Schema::new()
            .field("sensor", TypeDesc::Str)
            .field("samples", TypeDesc::list_of(TypeDesc::Int(Width::Int)))
    }
    fn to_fields(&self) -> Vec<Datum> {
        vec![
            Datum::from(self.sensor.as_str()),
            Datum::list(self.samples.iter().copied()),
        ]
    }
    fn from_fields(fields: Vec<Datum>) -> Result<Self> {
        let [sensor, samples] = take_fields(fields)?;
        Ok(Self {
            sensor: sensor.try_into()?,
            samples: samples.into_vec()?,
        })
    }
}

impl TryFrom<Datum> for Reading {
    type Error = anyhow::Error;
    fn try_from(dat: Datum) -> Result<Self> {
        Self::from_datum(dat)
    }
}

#[derive(PartialEq, Eq, Clone, Debug)]
pub struct Batch {
    pub seq: u64,
    pub readings: Vec<Reading>,
    pub checksum: u16,
}

impl Record for Batch {
    fn schema() -> Schema {
        Schema::new()
            .field("seq", Width::Long)
            .field("readings", TypeDesc::list_of(Reading::type_desc()))
            .field("checksum", Width::Short)
    }
    fn to_fields(&self) -> Vec<Datum> {
        vec![
            Datum::from(self.seq),
            Datum::List(self.readings.iter().map(Reading::to_datum).collect()),
            Datum::from(self.checksum),
        ]
    }
    fn from_fields(fields: Vec<Datum>) -> Result<Self> {
        let [seq, readings, checksum] = take_fields(fields)?;
        Ok(Self {
            seq: seq.try_into()?,
            readings: readings.into_vec()?,
            checksum: checksum.try_into()?,
        })
    }
}

pub fn gen_batch(seq: u64, readings_ct: usize) -> Batch {
    let readings = (0..readings_ct)
        .map(|i| Reading {
            sensor: format!("sensor-{seq}-{i}"),
            samples: (0..i as u32).map(|s| s * 7919).collect(),
        })
        .collect();
    Batch {
        seq,
        readings,
        checksum: (seq % 65536) as u16,
    }
}
