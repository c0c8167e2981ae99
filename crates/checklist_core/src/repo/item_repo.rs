//! Item store contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide fetch-all/insert/update/delete over the `items` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Every call commits on its own; there are no multi-item transactions.
//! - `fetch_all` returns items in insertion order.
//! - Read paths reject malformed persisted rows instead of masking them.

use crate::db::DbError;
use crate::model::item::{Item, ItemId};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ITEM_SELECT_SQL: &str = "SELECT
    uuid,
    title,
    is_checked
FROM items";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure raised by the persistence layer.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    NotFound(ItemId),
    InvalidData(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "item not found: {id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted item data: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Persistence boundary used by the list controller.
///
/// All calls are synchronous and block until committed.
pub trait ItemStore {
    fn fetch_all(&self) -> StoreResult<Vec<Item>>;
    fn insert(&self, item: &Item) -> StoreResult<()>;
    fn update(&self, item: &Item) -> StoreResult<()>;
    fn delete(&self, item: &Item) -> StoreResult<()>;
}

impl<S: ItemStore + ?Sized> ItemStore for &S {
    fn fetch_all(&self) -> StoreResult<Vec<Item>> {
        (**self).fetch_all()
    }

    fn insert(&self, item: &Item) -> StoreResult<()> {
        (**self).insert(item)
    }

    fn update(&self, item: &Item) -> StoreResult<()> {
        (**self).update(item)
    }

    fn delete(&self, item: &Item) -> StoreResult<()> {
        (**self).delete(item)
    }
}

/// SQLite-backed item store.
pub struct SqliteItemStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteItemStore<'conn> {
    /// Wraps a connection returned by `open_db` or `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ItemStore for SqliteItemStore<'_> {
    fn fetch_all(&self) -> StoreResult<Vec<Item>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ITEM_SELECT_SQL} ORDER BY rowid ASC;"))?;
        let mut rows = stmt.query([])?;
        let mut items = Vec::new();

        while let Some(row) = rows.next()? {
            items.push(parse_item_row(row)?);
        }

        Ok(items)
    }

    fn insert(&self, item: &Item) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO items (uuid, title, is_checked) VALUES (?1, ?2, ?3);",
            params![
                item.id.to_string(),
                item.title.as_str(),
                bool_to_int(item.is_checked),
            ],
        )?;
        Ok(())
    }

    fn update(&self, item: &Item) -> StoreResult<()> {
        let changed = self.conn.execute(
            "UPDATE items
             SET
                title = ?1,
                is_checked = ?2,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE uuid = ?3;",
            params![
                item.title.as_str(),
                bool_to_int(item.is_checked),
                item.id.to_string(),
            ],
        )?;

        if changed == 0 {
            return Err(StoreError::NotFound(item.id));
        }
        Ok(())
    }

    fn delete(&self, item: &Item) -> StoreResult<()> {
        let changed = self
            .conn
            .execute("DELETE FROM items WHERE uuid = ?1;", [item.id.to_string()])?;

        if changed == 0 {
            return Err(StoreError::NotFound(item.id));
        }
        Ok(())
    }
}

fn parse_item_row(row: &Row<'_>) -> StoreResult<Item> {
    let uuid_text: String = row.get("uuid")?;
    let id = Uuid::parse_str(&uuid_text).map_err(|_| {
        StoreError::InvalidData(format!("invalid uuid value `{uuid_text}` in items.uuid"))
    })?;

    let is_checked = match row.get::<_, i64>("is_checked")? {
        0 => false,
        1 => true,
        other => {
            return Err(StoreError::InvalidData(format!(
                "invalid is_checked value `{other}` in items.is_checked"
            )));
        }
    };

    Ok(Item::with_id(id, row.get::<_, String>("title")?, is_checked))
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}
