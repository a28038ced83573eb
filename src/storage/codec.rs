//! Fixed-width binary encoding of the ledger
//!
//! File layout, all integers little-endian:
//!
//! ```text
//! [i32 count] then count records of
//! [i32 id][11 bytes date][f32 amount][50 bytes category][100 bytes description]
//! ```
//!
//! Text fields are NUL-padded and always keep at least one NUL. Files written
//! by C builds of the ledger carry the compiler's struct padding (one byte after
//! the date, two at the end); those are read as [`RecordLayout::Native`].

use std::cmp::Ordering;
use std::fmt;

use crate::error::{LedgerError, LedgerResult};
use crate::models::{Amount, Expense, ExpenseId};
use crate::validation::validate_date;

/// Size of the record count prefix
pub const COUNT_BYTES: usize = 4;

/// Date buffer width, including the terminator
pub const DATE_FIELD: usize = 11;

/// Category buffer width, including the terminator
pub const CATEGORY_FIELD: usize = 50;

/// Description buffer width, including the terminator
pub const DESCRIPTION_FIELD: usize = 100;

/// How records are framed on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordLayout {
    /// Fields back to back, 169 bytes per record
    Packed,
    /// C struct layout with alignment padding, 172 bytes per record
    Native,
}

impl RecordLayout {
    /// Bytes per record
    pub const fn record_size(&self) -> usize {
        self.date_padding()
            + self.trailing_padding()
            + 4
            + DATE_FIELD
            + 4
            + CATEGORY_FIELD
            + DESCRIPTION_FIELD
    }

    const fn date_padding(&self) -> usize {
        match self {
            Self::Packed => 0,
            Self::Native => 1,
        }
    }

    const fn trailing_padding(&self) -> usize {
        match self {
            Self::Packed => 0,
            Self::Native => 2,
        }
    }

    /// Pick the layout that frames `payload` for `declared` records
    ///
    /// An exact fit wins, packed first. A damaged file fits neither, so the
    /// layout under which more leading records decode cleanly is used; on a
    /// tie the record size that divides the payload is preferred.
    pub fn detect(declared: usize, payload: &[u8]) -> Self {
        let packed = Self::Packed.record_size();
        let native = Self::Native.record_size();

        if declared.checked_mul(packed) == Some(payload.len()) {
            return Self::Packed;
        }
        if declared.checked_mul(native) == Some(payload.len()) {
            return Self::Native;
        }

        let packed_valid = Self::Packed.valid_prefix(declared, payload);
        let native_valid = Self::Native.valid_prefix(declared, payload);
        match native_valid.cmp(&packed_valid) {
            Ordering::Greater => Self::Native,
            Ordering::Less => Self::Packed,
            Ordering::Equal if payload.len() % native == 0 && payload.len() % packed != 0 => {
                Self::Native
            }
            Ordering::Equal => Self::Packed,
        }
    }

    /// Number of leading records that decode cleanly under this layout
    fn valid_prefix(self, declared: usize, payload: &[u8]) -> usize {
        payload
            .chunks_exact(self.record_size())
            .take(declared)
            .take_while(|chunk| decode_record(chunk, self).is_some())
            .count()
    }
}

impl fmt::Display for RecordLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Packed => write!(f, "packed"),
            Self::Native => write!(f, "native"),
        }
    }
}

/// Result of decoding a ledger file
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub records: Vec<Expense>,
    /// Record count stored in the prefix
    pub declared: usize,
    pub layout: RecordLayout,
}

impl Decoded {
    /// True if fewer records were read than the prefix promised
    pub fn is_truncated(&self) -> bool {
        self.records.len() < self.declared
    }
}

/// Encode records in store order using the packed layout
pub fn encode(records: &[Expense]) -> LedgerResult<Vec<u8>> {
    let count = i32::try_from(records.len()).map_err(|_| {
        LedgerError::Storage(format!("Too many expenses to save: {}", records.len()))
    })?;

    let mut buf =
        Vec::with_capacity(COUNT_BYTES + records.len() * RecordLayout::Packed.record_size());
    buf.extend_from_slice(&count.to_le_bytes());
    for expense in records {
        encode_record(expense, RecordLayout::Packed, &mut buf)?;
    }
    Ok(buf)
}

/// Append one record to `buf`
///
/// # Errors
///
/// Returns a storage error if the id does not fit the file's `i32` field.
pub fn encode_record(expense: &Expense, layout: RecordLayout, buf: &mut Vec<u8>) -> LedgerResult<()> {
    let id = i32::try_from(expense.id.get()).map_err(|_| {
        LedgerError::Storage(format!("Expense id {} is too large to save", expense.id))
    })?;

    buf.extend_from_slice(&id.to_le_bytes());
    put_text(buf, &expense.date, DATE_FIELD);
    buf.resize(buf.len() + layout.date_padding(), 0);
    buf.extend_from_slice(&expense.amount.value().to_le_bytes());
    put_text(buf, &expense.category, CATEGORY_FIELD);
    put_text(buf, &expense.description, DESCRIPTION_FIELD);
    buf.resize(buf.len() + layout.trailing_padding(), 0);
    Ok(())
}

/// Decode as many whole records as `bytes` holds
///
/// Never fails: a short or damaged file yields the complete records that
/// could be read, up to the first damaged one, and
/// [`Decoded::is_truncated`] reports the shortfall.
pub fn decode(bytes: &[u8]) -> Decoded {
    let Some(prefix) = bytes.get(..COUNT_BYTES) else {
        return Decoded {
            records: Vec::new(),
            declared: usize::from(!bytes.is_empty()),
            layout: RecordLayout::Packed,
        };
    };

    let declared = read_i32(prefix).max(0) as usize;
    let payload = &bytes[COUNT_BYTES..];
    let layout = RecordLayout::detect(declared, payload);

    let records = payload
        .chunks_exact(layout.record_size())
        .take(declared)
        .map_while(|chunk| decode_record(chunk, layout))
        .collect();

    Decoded {
        records,
        declared,
        layout,
    }
}

/// Decode one record; `chunk` must be exactly one record long
///
/// Returns `None` for a record no store could hold: a non-positive id, a
/// malformed date or an amount that is not a positive number.
pub fn decode_record(chunk: &[u8], layout: RecordLayout) -> Option<Expense> {
    let mut cursor = Cursor { bytes: chunk, pos: 0 };

    let id = u32::try_from(i32::from_le_bytes(cursor.array()))
        .ok()
        .filter(|id| *id > 0)?;
    let date = cursor.text(DATE_FIELD);
    cursor.skip(layout.date_padding());
    let amount = Amount::new(f32::from_le_bytes(cursor.array()));
    let category = cursor.text(CATEGORY_FIELD);
    let description = cursor.text(DESCRIPTION_FIELD);

    if !validate_date(&date) || !amount.is_positive() {
        return None;
    }

    Some(Expense {
        id: ExpenseId::new(id),
        date,
        amount,
        category,
        description,
    })
}

fn put_text(buf: &mut Vec<u8>, text: &str, width: usize) {
    let mut end = text.len().min(width - 1);
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    buf.extend_from_slice(&text.as_bytes()[..end]);
    buf.resize(buf.len() + width - end, 0);
}

fn read_i32(bytes: &[u8]) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[..4]);
    i32::from_le_bytes(raw)
}

struct Cursor<'a> {
    bytes: &'a [u8],
    pos: usize,
}

impl Cursor<'_> {
    fn array(&mut self) -> [u8; 4] {
        let mut raw = [0u8; 4];
        raw.copy_from_slice(&self.bytes[self.pos..self.pos + 4]);
        self.pos += 4;
        raw
    }

    fn text(&mut self, width: usize) -> String {
        let field = &self.bytes[self.pos..self.pos + width];
        self.pos += width;
        let end = field.iter().position(|b| *b == 0).unwrap_or(width);
        String::from_utf8_lossy(&field[..end]).into_owned()
    }

    fn skip(&mut self, n: usize) {
        self.pos += n;
    }
}
