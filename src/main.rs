mod db;

use db::{Db, Role};

/// The database file is created and migrated by the FiapCloudGames API;
/// this tool expects to be run from the repository root next to it.
const DB_FILE_PATH: &str = "FiapCloudGames.API/FiapCloudGames.db";
const TARGET_EMAIL: &str = "admin@fiap.com";

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut db = Db::open(DB_FILE_PATH)?;

    let updated = db.set_user_role(TARGET_EMAIL, Role::Admin)?;
    log::debug!("Set role of {TARGET_EMAIL} to {} ({updated} row(s))", Role::Admin);
    println!("Linhas atualizadas: {updated}");

    match db.get_user_by_email(TARGET_EMAIL)? {
        Some(user) => println!("Usuário: {user}"),
        None => println!("Usuário: None"),
    }

    Ok(())
}
