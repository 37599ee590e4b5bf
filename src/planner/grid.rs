//! Seat chart layout for renderers.
//!
//! The printable chart is drawn by an external renderer. This module
//! produces what it consumes: the export payload (students keyed by
//! `"row-col"` seat token) and a dense row-major grid covering
//! `0..=max_row × 0..=max_col`, with every third column shaded as an aisle.
//! Grids larger than [`MAX_GRID_CELLS`] are refused.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::SeatingError;
use crate::models::{Seat, SeatPool, Student, StudentId};
use crate::validation::{ValidationError, ValidationErrorKind};

/// Largest number of cells a seat chart may span.
pub const MAX_GRID_CELLS: u64 = 65_536;

/// Whether column `col` is drawn as an aisle (every third column).
#[inline]
pub fn is_aisle_column(col: u32) -> bool {
    col % 3 == 2
}

/// A seated student in the export payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportStudent {
    /// Student identifier.
    pub id: StudentId,
    /// Name printed in the seat cell.
    pub name: String,
    /// Seat token, `"row-col"`.
    pub position: String,
}

/// Payload for the seat chart exporter.
///
/// Wire form: `{"students": [{"id", "name", "position": "row-col"}], "seats": ["row-col", ...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRequest {
    /// Seated students.
    pub students: Vec<ExportStudent>,
    /// Seat pool tokens (`"row-col"`).
    pub seats: Vec<String>,
}

impl ExportRequest {
    /// Decodes a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, SeatingError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Lays the payload out as a grid.
    ///
    /// Fails with [`SeatingError::Validation`] if a seat or position token
    /// is malformed or the grid would exceed [`MAX_GRID_CELLS`].
    pub fn to_grid(&self) -> Result<SeatGrid, SeatingError> {
        let mut errors = Vec::new();

        let pool = match SeatPool::parse(self.seats.as_slice()) {
            Ok(pool) => pool,
            Err(parse_errors) => {
                errors.extend(parse_errors.into_iter().map(ValidationError::from));
                SeatPool::default()
            }
        };

        let mut occupants = Vec::with_capacity(self.students.len());
        for s in &self.students {
            match s.position.parse::<Seat>() {
                Ok(seat) => occupants.push((seat, Student::new(s.id.clone(), s.name.clone()))),
                Err(e) => errors.push(e.into()),
            }
        }

        if errors.is_empty() {
            SeatGrid::new(&pool, occupants)
        } else {
            Err(SeatingError::Validation(errors))
        }
    }
}

/// One cell of the seat chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridCell {
    /// Cell coordinate.
    pub seat: Seat,
    /// Seat token, `"row-col"`.
    pub key: String,
    /// Whether the coordinate belongs to the seat pool.
    pub in_pool: bool,
    /// Whether the cell sits in an aisle column.
    pub aisle: bool,
    /// Occupant, if any.
    pub student: Option<Student>,
}

/// Dense row-major seat chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeatGrid {
    /// Number of rows (`max_row + 1`).
    pub rows: u32,
    /// Number of columns (`max_col + 1`).
    pub cols: u32,
    cells: Vec<GridCell>,
}

impl SeatGrid {
    /// Builds a grid spanning `pool`'s extent.
    ///
    /// Occupants outside that extent are not drawn. Fails with
    /// [`ValidationErrorKind::GridTooLarge`] when the extent covers more than
    /// [`MAX_GRID_CELLS`] cells.
    pub fn new(
        pool: &SeatPool,
        occupants: impl IntoIterator<Item = (Seat, Student)>,
    ) -> Result<Self, SeatingError> {
        let (rows, cols) = pool.extent();
        let too_large = || {
            SeatingError::Validation(vec![ValidationError::new(
                ValidationErrorKind::GridTooLarge,
                format!("Seat chart of {rows} x {cols} exceeds {MAX_GRID_CELLS} cells"),
            )])
        };
        let total = rows
            .checked_mul(cols)
            .filter(|&n| n <= MAX_GRID_CELLS)
            .ok_or_else(too_large)?;
        let rows = u32::try_from(rows).map_err(|_| too_large())?;
        let cols = u32::try_from(cols).map_err(|_| too_large())?;

        let mut by_seat: HashMap<Seat, Student> = occupants.into_iter().collect();

        let mut cells = Vec::with_capacity(total as usize);
        for row in 0..rows {
            for col in 0..cols {
                let seat = Seat::new(row, col);
                cells.push(GridCell {
                    seat,
                    key: seat.key(),
                    in_pool: pool.contains(&seat),
                    aisle: is_aisle_column(col),
                    student: by_seat.remove(&seat),
                });
            }
        }

        Ok(Self { rows, cols, cells })
    }

    /// Cell at `(row, col)`.
    pub fn cell(&self, row: u32, col: u32) -> Option<&GridCell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let index = u64::from(row) * u64::from(self.cols) + u64::from(col);
        self.cells.get(usize::try_from(index).ok()?)
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    /// Cells grouped by row.
    pub fn by_row(&self) -> impl Iterator<Item = &[GridCell]> {
        self.cells.chunks(self.cols.max(1) as usize)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.student.is_some()).count()
    }
}
