use crate::StrError;
use std::fs::File;
use std::io::{BufRead, BufReader};

/// Holds the sample points loaded from an AD output table
///
/// The file carries one header line followed by rows of four
/// whitespace-separated numbers: x, y, f(x,y), f'(x,y)
pub struct SampleTable {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub f: Vec<f64>,
    pub fp: Vec<f64>,
}

impl SampleTable {
    /// Reads the table from a file, skipping the first (header) line
    ///
    /// Blank lines are ignored; any other deviation from four numeric
    /// columns per row is an error
    pub fn read(full_path: &str) -> Result<Self, StrError> {
        let file = File::open(full_path).map_err(|_| "cannot open data file")?;
        let buffered = BufReader::new(file);
        let mut table = SampleTable {
            x: Vec::new(),
            y: Vec::new(),
            f: Vec::new(),
            fp: Vec::new(),
        };
        for (i, line) in buffered.lines().enumerate() {
            let line = line.map_err(|_| "cannot read line from data file")?;
            if i == 0 {
                continue; // header
            }
            if line.trim().is_empty() {
                continue;
            }
            let mut row = [0.0; 4];
            let mut count = 0;
            for word in line.split_whitespace() {
                if count == 4 {
                    return Err("data row has more than four columns");
                }
                row[count] = word.parse().map_err(|_| "cannot parse number in data file")?;
                count += 1;
            }
            if count != 4 {
                return Err("data row must have four columns");
            }
            table.x.push(row[0]);
            table.y.push(row[1]);
            table.f.push(row[2]);
            table.fp.push(row[3]);
        }
        Ok(table)
    }

    /// Returns the number of data rows
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if no data row has been read
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}
