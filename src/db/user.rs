use anyhow::bail;
use rusqlite::types::{FromSql, ToSql};
use std::fmt;

/// Value of the `Role` column of the `Users` table. The API stores the
/// numeric values of its role enum: 0 for ordinary users, 1 for
/// administrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn flag(self) -> i64 {
        match self {
            Self::User => 0,
            Self::Admin => 1,
        }
    }

    pub fn from_flag(flag: i64) -> anyhow::Result<Self> {
        match flag {
            0 => Ok(Self::User),
            1 => Ok(Self::Admin),
            _ => bail!("Unknown role flag: {flag}"),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.flag().fmt(f)
    }
}

impl ToSql for Role {
    fn to_sql(&self) -> rusqlite::Result<rusqlite::types::ToSqlOutput<'_>> {
        Ok(rusqlite::types::ToSqlOutput::from(self.flag()))
    }
}

impl FromSql for Role {
    fn column_result(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        let flag = <i64 as FromSql>::column_result(value)?;
        Role::from_flag(flag).map_err(|err| rusqlite::types::FromSqlError::Other(err.into()))
    }
}

#[derive(Debug)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

impl User {
    pub fn from_full_row(row: &rusqlite::Row) -> anyhow::Result<Self> {
        let result = Self {
            id: row.get("Id")?,
            name: row.get("Name")?,
            email: row.get("Email")?,
            role: row.get("Role")?,
        };
        Ok(result)
    }
}

impl fmt::Display for User {
    /// Renders the row as the verification report prints it,
    /// e.g. `(1, 'Admin', 'admin@fiap.com', 1)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, '{}', '{}', {})",
            self.id, self.name, self.email, self.role
        )
    }
}
