use std::{fs::File, path::Path};

use csv::DeserializeRecordsIntoIter;
use detection::{Sample, SampleSource, SensorReadError};
use math::Vector;

/// Plays back accelerometer samples recorded to CSV. Rows either hold just `x,y,z`, or the full
/// `time,gyro.x,gyro.y,gyro.z,accel.x,accel.y,accel.z` layout the bench recorder prints, in which
/// case only the accelerometer columns are used.
///
pub struct CsvSource
{
    records: DeserializeRecordsIntoIter<File, Vec<f32>>,
    row: usize,
}

impl CsvSource
{
    pub fn open(path: &Path) -> Result<Self, csv::Error> {
        let reader = csv::Reader::from_path(path)?;
        Ok(CsvSource { records: reader.into_deserialize(), row: 0 })
    }
}

impl SampleSource for CsvSource
{
    fn read_sample(&mut self) -> Result<Sample, SensorReadError> {
        let record = match self.records.next() {
            Some(record) => record,
            None => return Err(SensorReadError::EndOfStream),
        };
        self.row += 1;

        let record = record.map_err(|err| {
            log::warn!("Skipping unreadable row {}: {}", self.row, err);
            SensorReadError::InvalidData
        })?;

        match record.len() {
            3 => Ok(Vector::new(record[0], record[1], record[2])),
            7 => Ok(Vector::new(record[4], record[5], record[6])),
            len => {
                log::warn!("Row {} has {} columns, expected 3 or 7", self.row, len);
                Err(SensorReadError::InvalidData)
            }
        }
    }
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Write};

    use super::*;

    fn write_csv(name: &str, contents: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!("test-replay-{}-{}.csv", name, std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    pub fn reads_both_row_layouts() {
        let path = write_csv("layouts", "x,y,z\n0.1,0.2,0.9\n");
        let mut source = CsvSource::open(&path).unwrap();
        assert_eq!(source.read_sample(), Ok(Vector::new(0.1, 0.2, 0.9)));
        assert_eq!(source.read_sample(), Err(SensorReadError::EndOfStream));

        let path = write_csv(
            "recorder",
            "time,gyro.x,gyro.y,gyro.z,accel.x,accel.y,accel.z\n1000,0.5,0.5,0.5,0.0,0.0,1.0\n",
        );
        let mut source = CsvSource::open(&path).unwrap();
        assert_eq!(source.read_sample(), Ok(Vector::new(0.0, 0.0, 1.0)));
    }

    #[test]
    pub fn bad_rows_are_invalid_data() {
        let path = write_csv("bad", "x,y,z\n0.1,oops,0.9\n0.0,0.0,1.0\n");
        let mut source = CsvSource::open(&path).unwrap();
        assert_eq!(source.read_sample(), Err(SensorReadError::InvalidData));
        assert_eq!(source.read_sample(), Ok(Vector::new(0.0, 0.0, 1.0)));
    }
}
