mod user;

pub use self::user::{Role, User};

use anyhow::Context;

pub struct Db {
    pub conn: rusqlite::Connection,
}

impl Db {
    /// Opens an existing database file. The schema is owned by the API, so a
    /// missing or unreadable file is an error rather than something to create.
    pub fn open(file_path: &str) -> anyhow::Result<Self> {
        let conn = rusqlite::Connection::open_with_flags(
            file_path,
            rusqlite::OpenFlags::SQLITE_OPEN_READ_WRITE,
        )
        .with_context(|| format!("Failed to open SQLite DB: {file_path}"))?;
        Ok(Self { conn })
    }

    fn optional_single_row_result<T>(result: anyhow::Result<T>) -> anyhow::Result<Option<T>> {
        match result {
            Ok(row) => Ok(Some(row)),
            Err(err) => match err.downcast::<rusqlite::Error>() {
                Ok(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                Ok(rusqlite_err) => Err(rusqlite_err.into()),
                Err(err) => Err(err),
            },
        }
    }

    /// Sets the role flag of every user matching `email`, committing before
    /// returning so the change is visible to any subsequent read. Returns the
    /// number of rows that matched; zero matches is not an error.
    pub fn set_user_role(&mut self, email: &str, role: Role) -> anyhow::Result<usize> {
        let tx = self
            .conn
            .transaction()
            .context("Starting role update transaction")?;

        let updated = tx
            .execute(
                "UPDATE Users SET Role = :role WHERE Email = :email",
                rusqlite::named_params! {
                    ":role": role,
                    ":email": email,
                },
            )
            .with_context(|| format!("Updating role of user {email}"))?;

        tx.commit()
            .with_context(|| format!("Committing role update of user {email}"))?;
        Ok(updated)
    }

    pub fn get_user_by_email(&mut self, email: &str) -> anyhow::Result<Option<User>> {
        let result = self
            .conn
            .query_row_and_then(
                "SELECT Id, Name, Email, Role FROM Users WHERE Email = ? LIMIT 1",
                (email,),
                |row| {
                    User::from_full_row(row)
                        .with_context(|| format!("Deserializing Users row: {row:?}"))
                },
            )
            .with_context(|| format!("Querying Users for email {email}"));

        Self::optional_single_row_result(result)
    }
}
