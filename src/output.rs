use std::io::{Read, Write};
use serde::{Deserialize, Serialize};
use crate::config::Config;
use crate::error::Error;
use crate::hydro::StateVector;
use crate::patch::Patch;




/**
 * The simulation solution state, as written to disk. The interior solution
 * is stored in row-major order with the conserved components of each zone
 * interleaved.
 */
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub config: Config,
    pub time: f64,
    pub iteration: u64,
    pub num_fields: usize,
    pub data: Vec<f64>,
}




/**
 * Serialize a checkpoint in CBOR format.
 */
pub fn write_checkpoint<W: Write>(writer: W, checkpoint: &Checkpoint) -> Result<(), Error> {
    ciborium::ser::into_writer(checkpoint, writer).map_err(|e| Error::Checkpoint(e.to_string()))
}




/**
 * Deserialize a checkpoint written by `write_checkpoint`.
 */
pub fn read_checkpoint<R: Read>(reader: R) -> Result<Checkpoint, Error> {
    ciborium::de::from_reader(reader).map_err(|e| Error::Checkpoint(e.to_string()))
}




/**
 * The Portable Gray Map (PGM) format is one of the few graphics formats that
 * can be written in a handful of lines without any library calls. The state
 * vector is not written directly: the function `f` maps each zone to an
 * intensity, which is clamped to the range [0, 255]. Rows are written from
 * the top of the domain (largest j) down.
 */
pub fn write_pgm<W, F, const NUM_FIELDS: usize>(
    mut writer: W,
    u: &Patch<StateVector<NUM_FIELDS>>,
    f: F) -> Result<(), Error>
where
    W: Write,
    F: Fn(&StateVector<NUM_FIELDS>) -> i64
{
    let (ni, nj) = u.interior().dim();
    let mut row = Vec::with_capacity(ni);

    write!(writer, "P5\n{} {} 255\n", ni, nj)?;

    for j in (0..nj as i64).rev() {
        row.clear();
        row.extend((0..ni as i64).map(|i| f(u.get((i, j))).clamp(0, 255) as u8));
        writer.write_all(&row)?;
    }
    writer.flush()?;
    Ok(())
}




// ============================================================================
#[cfg(test)]
mod test {

    use super::{read_checkpoint, write_checkpoint, write_pgm, Checkpoint};
    use crate::config::Config;
    use crate::error::Error;
    use crate::index_space::range2d;
    use crate::num_vec::Vector;
    use crate::patch::Patch;

    #[test]
    fn pgm_rows_run_top_to_bottom_and_clamp() {
        let u = Patch::from_function(range2d(0..3, 0..2), 3, |(i, j)| Vector::new([(100 * i + 10 * j) as f64 - 50.0]));
        let mut bytes = Vec::new();
        write_pgm(&mut bytes, &u, |u| u[0] as i64).unwrap();

        let header = b"P5\n3 2 255\n";
        assert_eq!(&bytes[..header.len()], header);
        assert_eq!(&bytes[header.len()..], &[0, 60, 160, 0, 50, 150]);
    }

    #[test]
    fn checkpoint_survives_cbor_encoding() {
        let checkpoint = Checkpoint {
            config: Config::new((1.0, 2.0), (2, 1), 0.3, 1.5),
            time: 0.25,
            iteration: 7,
            num_fields: 3,
            data: vec![1.0, 0.0, 0.5, 1.5, -0.25, 0.0],
        };
        let mut bytes = Vec::new();
        write_checkpoint(&mut bytes, &checkpoint).unwrap();
        assert_eq!(read_checkpoint(&bytes[..]).unwrap(), checkpoint);
    }

    #[test]
    fn garbage_is_not_a_checkpoint() {
        assert!(matches!(read_checkpoint(&b"not cbor"[..]), Err(Error::Checkpoint(_))));
    }
}
