// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Project Automation
//!
//! Wraps the cargo invocations used in CI and provisions the throwaway
//! `MariaDB` containers the backend checks need.
//!
//! ### Backend Commands
//!
//! - `cargo test`: Runs the full suite against `SQLite` (no infrastructure)
//! - `cargo xtask test-mariadb`: Runs the ignored backend validation tests
//!   against a `MariaDB` 11 container
//! - `cargo xtask verify-migrations`: Applies both migration trees and
//!   compares the resulting schemas
//!
//! Containers are owned by a guard value and removed when it drops, even
//! when a test or comparison fails.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{
    collections::{BTreeMap, BTreeSet},
    io,
    process::Output,
    thread::sleep,
    time::Duration,
};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{
    eyre::{eyre, Context},
    Result,
};
use diesel::sql_types::{BigInt, Integer, Nullable, Text};
use diesel::{Connection, MysqlConnection, QueryableByName, RunQueryDsl, SqliteConnection};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Package holding the migrations and the backend validation tests.
const PERSISTENCE_PACKAGE: &str = "userdb-persistence";

/// Environment variable the backend validation tests check before running.
const TEST_BACKEND_VAR: &str = "USERDB_TEST_BACKEND";

const SQLITE_MIGRATIONS: EmbeddedMigrations = embed_migrations!("../crates/persistence/migrations");
const MYSQL_MIGRATIONS: EmbeddedMigrations =
    embed_migrations!("../crates/persistence/migrations_mysql");

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test, backend checks)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Lint formatting, typos, clippy, and docs
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check documentation for errors and warnings
    #[command(visible_alias = "d")]
    LintDocs,

    /// Check for formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Check for typos in the project
    #[command(visible_alias = "lt")]
    LintTypos,

    /// Fix clippy warnings in the project
    #[command(visible_alias = "fc")]
    FixClippy,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Fix typos in the project
    #[command(visible_alias = "typos")]
    FixTypos,

    /// Run tests
    #[command(visible_alias = "t")]
    Test,

    /// Run doc tests
    #[command(visible_alias = "td")]
    TestDocs,

    /// Run lib tests
    #[command(visible_alias = "tl")]
    TestLibs,

    /// Run `MariaDB` backend validation tests
    #[command(visible_alias = "tm")]
    TestMariadb,

    /// Verify schema parity between `SQLite` and `MySQL` migrations
    #[command(visible_alias = "vm")]
    VerifyMigrations,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::LintTypos => lint_typos(),
            Self::FixClippy => fix_clippy(),
            Self::FixFormatting => fix_format(),
            Self::FixTypos => fix_typos(),
            Self::Test => test(),
            Self::TestDocs => test_docs(),
            Self::TestLibs => test_libs(),
            Self::TestMariadb => test_mariadb(),
            Self::VerifyMigrations => verify_migrations(),
        }
    }
}

/// Run CI checks
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    test_mariadb()?;
    verify_migrations()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint formatting, typos, clippy, and docs
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    lint_typos()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Fix clippy warnings in the project
fn fix_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--fix",
        "--allow-dirty",
        "--allow-staged",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without warnings for every default workspace member
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Check for typos in the project using [typos-cli](https://github.com/crate-ci/typos/)
fn lint_typos() -> Result<()> {
    cmd!("typos").run_with_trace()?;
    Ok(())
}

/// Fix typos in the project
fn fix_typos() -> Result<()> {
    cmd!("typos", "-w").run_with_trace()?;
    Ok(())
}

/// Run lib and doc tests
fn test() -> Result<()> {
    test_libs()?;
    test_docs()?;
    Ok(())
}

/// Run doc tests for the workspace's default packages
fn test_docs() -> Result<()> {
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run lib tests for the workspace's default packages
fn test_libs() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

// ============================================================================
// MariaDB containers
// ============================================================================

/// A running `MariaDB` container, removed on drop.
struct MariaDb {
    container: &'static str,
    database: &'static str,
    user: &'static str,
    password: &'static str,
    port: u16,
}

impl MariaDb {
    /// Seconds to wait for the server to accept connections.
    const READY_TIMEOUT_SECS: u32 = 30;

    /// Starts a fresh container, replacing any leftover one with the same
    /// name, and waits until it accepts queries.
    fn start(
        container: &'static str,
        database: &'static str,
        password: &'static str,
        port: u16,
    ) -> Result<Self> {
        tracing::info!("Checking Docker availability");
        cmd!("docker", "--version")
            .run_with_trace()
            .wrap_err("Docker is not available. Please install Docker.")?;

        let db = Self {
            container,
            database,
            user: "userdb",
            password,
            port,
        };

        db.remove();

        tracing::info!("Starting MariaDB container: {container}");
        cmd!(
            "docker",
            "run",
            "--name",
            container,
            "-e",
            format!("MARIADB_DATABASE={database}"),
            "-e",
            format!("MARIADB_USER={}", db.user),
            "-e",
            format!("MARIADB_PASSWORD={password}"),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{port}:3306"),
            "-d",
            "mariadb:11"
        )
        .run_with_trace()
        .wrap_err("Failed to start MariaDB container")?;

        db.wait_ready()?;
        Ok(db)
    }

    fn wait_ready(&self) -> Result<()> {
        tracing::info!("Waiting for MariaDB to be ready...");
        for attempt in 1..=Self::READY_TIMEOUT_SECS {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {attempt}/{}", Self::READY_TIMEOUT_SECS);

            let ping = cmd!(
                "docker",
                "exec",
                self.container,
                "mariadb",
                "-u",
                self.user,
                format!("-p{}", self.password),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();

            if ping.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(());
            }
        }

        Err(eyre!("MariaDB did not become ready within timeout"))
    }

    fn url(&self) -> String {
        format!(
            "mysql://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.port, self.database
        )
    }

    fn remove(&self) {
        let _ = cmd!("docker", "stop", self.container)
            .stdout_null()
            .stderr_null()
            .run();
        let _ = cmd!("docker", "rm", self.container)
            .stdout_null()
            .stderr_null()
            .run();
    }
}

impl Drop for MariaDb {
    fn drop(&mut self) {
        tracing::info!("Removing MariaDB container: {}", self.container);
        self.remove();
    }
}

/// Run `MariaDB` backend validation tests
///
/// Starts a `MariaDB` 11 container on port 3307, then runs the ignored
/// `backend_validation_tests` of the persistence crate with:
///
/// - `DATABASE_URL`: the container's connection string
/// - `USERDB_TEST_BACKEND`: `mariadb`
///
/// Tests run single-threaded because they share one database.
///
/// ## Requirements
///
/// - Docker must be installed and running
/// - Port 3307 must be available
/// - `MySQL` client libraries must be available for compilation
fn test_mariadb() -> Result<()> {
    tracing::info!("Starting MariaDB backend validation");
    let db = MariaDb::start("userdb-test-mariadb", "userdb_test", "test_password", 3307)?;

    tracing::info!("Running MariaDB backend validation tests");
    cmd!(
        "cargo",
        "test",
        "--package",
        PERSISTENCE_PACKAGE,
        "backend_validation_tests",
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", db.url())
    .env(TEST_BACKEND_VAR, "mariadb")
    .run_with_trace()
    .wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation completed successfully");
    Ok(())
}

/// Verify schema parity between `SQLite` and `MySQL` migrations
///
/// Applies `migrations/` to an in-memory `SQLite` database and
/// `migrations_mysql/` to a `MariaDB` container on port 3308, introspects
/// both, normalizes column types, and fails listing every difference in
/// tables, columns, keys, unique constraints and indexes.
///
/// Collations are not compared. `MySQL` text columns are all
/// case-insensitive, while `SQLite` only marks the username columns.
fn verify_migrations() -> Result<()> {
    tracing::info!("Starting schema parity verification");
    let db = MariaDb::start(
        "userdb-verify-migrations",
        "userdb_verify",
        "verify_password",
        3308,
    )?;

    tracing::info!("Applying SQLite migrations");
    let mut sqlite_conn = SqliteConnection::establish(":memory:")
        .wrap_err("Failed to create SQLite in-memory database")?;
    diesel::sql_query("PRAGMA foreign_keys = ON")
        .execute(&mut sqlite_conn)
        .wrap_err("Failed to enable foreign keys on SQLite")?;
    sqlite_conn
        .run_pending_migrations(SQLITE_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply SQLite migrations: {e}"))?;

    tracing::info!("Applying MySQL migrations");
    let mut mysql_conn =
        MysqlConnection::establish(&db.url()).wrap_err("Failed to connect to MariaDB")?;
    mysql_conn
        .run_pending_migrations(MYSQL_MIGRATIONS)
        .map_err(|e| eyre!("Failed to apply MySQL migrations: {e}"))?;

    tracing::info!("Introspecting schemas");
    let sqlite_schema = introspect_sqlite_schema(&mut sqlite_conn)?;
    let mysql_schema = introspect_mysql_schema(&mut mysql_conn, db.database)?;

    let mismatches = compare_schemas(&sqlite_schema, &mysql_schema);
    if !mismatches.is_empty() {
        return Err(eyre!(
            "Schema parity check FAILED:\n{}",
            mismatches
                .iter()
                .map(|m| format!("  - {m}"))
                .collect::<Vec<_>>()
                .join("\n")
        ));
    }

    tracing::info!(
        tables = sqlite_schema.tables.len(),
        "Schema parity verification passed"
    );
    Ok(())
}

// ============================================================================
// Schema introspection
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Schema {
    tables: BTreeMap<String, Table>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Table {
    columns: BTreeMap<String, Column>,
    primary_keys: BTreeSet<String>,
    foreign_keys: BTreeSet<ForeignKey>,
    unique_constraints: BTreeSet<Vec<String>>,
    /// Index column lists; names differ between backends and are ignored.
    indexes: BTreeSet<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Column {
    normalized_type: &'static str,
    nullable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct ForeignKey {
    from_column: String,
    to_table: String,
    to_column: String,
}

fn introspect_sqlite_schema(conn: &mut SqliteConnection) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        r#type: String,
        #[diesel(sql_type = Integer)]
        notnull: i32,
        #[diesel(sql_type = Integer)]
        pk: i32,
    }

    #[derive(QueryableByName)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        table: String,
        #[diesel(sql_type = Text)]
        from: String,
        #[diesel(sql_type = Text)]
        to: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        name: String,
        #[diesel(sql_type = Text)]
        origin: String,
    }

    #[derive(QueryableByName)]
    struct IndexColumnInfo {
        #[diesel(sql_type = Text)]
        name: String,
    }

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT name FROM sqlite_master \
         WHERE type = 'table' AND name NOT LIKE 'sqlite_%' \
           AND name != '__diesel_schema_migrations' \
         ORDER BY name",
    )
    .load(conn)
    .wrap_err("Failed to query SQLite tables")?;

    let mut schema = Schema::default();
    for table in tables {
        let mut info = Table::default();

        let pragma = format!("PRAGMA table_info({})", table.name);
        let columns: Vec<ColumnInfo> = diesel::sql_query(pragma)
            .load(conn)
            .wrap_err_with(|| format!("Failed to get columns for {}", table.name))?;
        for col in columns {
            if col.pk > 0 {
                info.primary_keys.insert(col.name.clone());
            }
            info.columns.insert(
                col.name,
                Column {
                    normalized_type: normalize_sqlite_type(&col.r#type),
                    nullable: col.notnull == 0,
                },
            );
        }

        let pragma = format!("PRAGMA foreign_key_list({})", table.name);
        let fks: Vec<ForeignKeyInfo> = diesel::sql_query(pragma)
            .load(conn)
            .wrap_err_with(|| format!("Failed to get foreign keys for {}", table.name))?;
        for fk in fks {
            info.foreign_keys.insert(ForeignKey {
                from_column: fk.from,
                to_table: fk.table,
                to_column: fk.to,
            });
        }

        let pragma = format!("PRAGMA index_list({})", table.name);
        let indexes: Vec<IndexInfo> = diesel::sql_query(pragma)
            .load(conn)
            .wrap_err_with(|| format!("Failed to get indexes for {}", table.name))?;
        for idx in indexes {
            let pragma = format!("PRAGMA index_info({})", idx.name);
            let columns: Vec<String> = diesel::sql_query(pragma)
                .load::<IndexColumnInfo>(conn)
                .wrap_err_with(|| format!("Failed to get index columns for {}", idx.name))?
                .into_iter()
                .map(|c| c.name)
                .collect();

            // origin: 'u' = UNIQUE constraint, 'c' = CREATE INDEX, 'pk' = primary key
            match idx.origin.as_str() {
                "u" => {
                    info.unique_constraints.insert(columns);
                }
                "c" => {
                    info.indexes.insert(columns);
                }
                _ => {}
            }
        }

        schema.tables.insert(table.name, info);
    }

    Ok(schema)
}

fn introspect_mysql_schema(conn: &mut MysqlConnection, database: &str) -> Result<Schema> {
    #[derive(QueryableByName)]
    struct TableName {
        #[diesel(sql_type = Text)]
        table_name: String,
    }

    #[derive(QueryableByName)]
    struct ColumnInfo {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        data_type: String,
        #[diesel(sql_type = Text)]
        is_nullable: String,
        #[diesel(sql_type = Text)]
        column_key: String,
    }

    #[derive(QueryableByName)]
    #[allow(clippy::struct_field_names)]
    struct ForeignKeyInfo {
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = Text)]
        referenced_table_name: String,
        #[diesel(sql_type = Text)]
        referenced_column_name: String,
    }

    #[derive(QueryableByName)]
    struct IndexInfo {
        #[diesel(sql_type = Text)]
        index_name: String,
        #[diesel(sql_type = Text)]
        column_name: String,
        #[diesel(sql_type = BigInt)]
        non_unique: i64,
        #[diesel(sql_type = Nullable<Text>)]
        constraint_type: Option<String>,
    }

    let tables: Vec<TableName> = diesel::sql_query(
        "SELECT table_name AS table_name FROM information_schema.tables \
         WHERE table_schema = ? AND table_name != '__diesel_schema_migrations' \
         ORDER BY table_name",
    )
    .bind::<Text, _>(database)
    .load(conn)
    .wrap_err("Failed to query MySQL tables")?;

    let mut schema = Schema::default();
    for table in tables {
        let mut info = Table::default();

        let columns: Vec<ColumnInfo> = diesel::sql_query(
            "SELECT column_name AS column_name, data_type AS data_type, \
                    is_nullable AS is_nullable, column_key AS column_key \
             FROM information_schema.columns \
             WHERE table_schema = ? AND table_name = ? \
             ORDER BY ordinal_position",
        )
        .bind::<Text, _>(database)
        .bind::<Text, _>(&table.table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to get columns for {}", table.table_name))?;
        for col in columns {
            if col.column_key == "PRI" {
                info.primary_keys.insert(col.column_name.clone());
            }
            info.columns.insert(
                col.column_name,
                Column {
                    normalized_type: normalize_mysql_type(&col.data_type),
                    nullable: col.is_nullable == "YES",
                },
            );
        }

        let fks: Vec<ForeignKeyInfo> = diesel::sql_query(
            "SELECT column_name AS column_name, \
                    referenced_table_name AS referenced_table_name, \
                    referenced_column_name AS referenced_column_name \
             FROM information_schema.key_column_usage \
             WHERE table_schema = ? AND table_name = ? AND referenced_table_name IS NOT NULL",
        )
        .bind::<Text, _>(database)
        .bind::<Text, _>(&table.table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to get foreign keys for {}", table.table_name))?;
        for fk in fks {
            info.foreign_keys.insert(ForeignKey {
                from_column: fk.column_name,
                to_table: fk.referenced_table_name,
                to_column: fk.referenced_column_name,
            });
        }

        // One row per index column; UNIQUE constraints show up here too,
        // joined to their constraint record.
        let rows: Vec<IndexInfo> = diesel::sql_query(
            "SELECT s.index_name AS index_name, s.column_name AS column_name, \
                    s.non_unique AS non_unique, tc.constraint_type AS constraint_type \
             FROM information_schema.statistics AS s \
             LEFT JOIN information_schema.table_constraints AS tc \
                    ON tc.table_schema = s.table_schema \
                   AND tc.table_name = s.table_name \
                   AND tc.constraint_name = s.index_name \
             WHERE s.table_schema = ? AND s.table_name = ? AND s.index_name != 'PRIMARY' \
             ORDER BY s.index_name, s.seq_in_index",
        )
        .bind::<Text, _>(database)
        .bind::<Text, _>(&table.table_name)
        .load(conn)
        .wrap_err_with(|| format!("Failed to get indexes for {}", table.table_name))?;

        let mut unique: BTreeMap<String, Vec<String>> = BTreeMap::new();
        let mut plain: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in rows {
            let is_unique = row.non_unique == 0 || row.constraint_type.as_deref() == Some("UNIQUE");
            let target = if is_unique { &mut unique } else { &mut plain };
            target
                .entry(row.index_name)
                .or_default()
                .push(row.column_name);
        }
        info.unique_constraints.extend(unique.into_values());
        info.indexes.extend(plain.into_values());

        schema.tables.insert(table.table_name, info);
    }

    Ok(schema)
}

/// Maps a `SQLite` declared type to its affinity.
fn normalize_sqlite_type(sqlite_type: &str) -> &'static str {
    let upper = sqlite_type.to_uppercase();
    // BOOLEAN has numeric affinity in SQLite and is TINYINT in MySQL
    if upper.contains("INT") || upper.contains("BOOL") {
        "integer"
    } else if upper.contains("REAL") || upper.contains("FLOA") || upper.contains("DOUB") {
        "real"
    } else if upper.contains("BLOB") {
        "blob"
    } else {
        "text"
    }
}

/// Maps a `MySQL` `DATA_TYPE` to the same categories as
/// [`normalize_sqlite_type`].
fn normalize_mysql_type(mysql_type: &str) -> &'static str {
    match mysql_type.to_uppercase().as_str() {
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" | "BOOLEAN" => "integer",
        "DECIMAL" | "NUMERIC" | "FLOAT" | "DOUBLE" | "REAL" => "real",
        "BINARY" | "VARBINARY" | "TINYBLOB" | "BLOB" | "MEDIUMBLOB" | "LONGBLOB" => "blob",
        _ => "text",
    }
}

/// Compares two schemas and returns every difference found.
///
/// `MySQL` adds an index for each foreign key column that lacks one, so
/// extra single-column indexes on foreign key columns are accepted.
fn compare_schemas(sqlite: &Schema, mysql: &Schema) -> Vec<String> {
    let mut mismatches = Vec::new();

    for name in only_in(&sqlite.tables, &mysql.tables) {
        mismatches.push(format!("table '{name}' exists only in SQLite"));
    }
    for name in only_in(&mysql.tables, &sqlite.tables) {
        mismatches.push(format!("table '{name}' exists only in MySQL"));
    }

    for (name, lite) in &sqlite.tables {
        let Some(my) = mysql.tables.get(name) else {
            continue;
        };
        compare_tables(name, lite, my, &mut mismatches);
    }

    mismatches
}

fn compare_tables(name: &str, lite: &Table, my: &Table, mismatches: &mut Vec<String>) {
    for col in only_in(&lite.columns, &my.columns) {
        mismatches.push(format!("{name}.{col} exists only in SQLite"));
    }
    for col in only_in(&my.columns, &lite.columns) {
        mismatches.push(format!("{name}.{col} exists only in MySQL"));
    }

    for (col, lite_col) in &lite.columns {
        let Some(my_col) = my.columns.get(col) else {
            continue;
        };
        if lite_col.normalized_type != my_col.normalized_type {
            mismatches.push(format!(
                "{name}.{col} type: SQLite {} vs MySQL {}",
                lite_col.normalized_type, my_col.normalized_type
            ));
        }
        if lite_col.nullable != my_col.nullable {
            mismatches.push(format!(
                "{name}.{col} nullable: SQLite {} vs MySQL {}",
                lite_col.nullable, my_col.nullable
            ));
        }
    }

    if lite.primary_keys != my.primary_keys {
        mismatches.push(format!(
            "{name} primary key: SQLite {:?} vs MySQL {:?}",
            lite.primary_keys, my.primary_keys
        ));
    }
    if lite.foreign_keys != my.foreign_keys {
        mismatches.push(format!(
            "{name} foreign keys: SQLite {:?} vs MySQL {:?}",
            lite.foreign_keys, my.foreign_keys
        ));
    }
    if lite.unique_constraints != my.unique_constraints {
        mismatches.push(format!(
            "{name} unique constraints: SQLite {:?} vs MySQL {:?}",
            lite.unique_constraints, my.unique_constraints
        ));
    }

    for missing in lite.indexes.difference(&my.indexes) {
        mismatches.push(format!("{name} index {missing:?} missing in MySQL"));
    }
    let fk_columns: BTreeSet<&String> = my.foreign_keys.iter().map(|fk| &fk.from_column).collect();
    for extra in my.indexes.difference(&lite.indexes) {
        let implicit_fk_index = matches!(extra.as_slice(), [col] if fk_columns.contains(col));
        if !implicit_fk_index {
            mismatches.push(format!("{name} index {extra:?} exists only in MySQL"));
        }
    }
}

/// Keys of `left` that are absent from `right`.
fn only_in<'a, V, W>(
    left: &'a BTreeMap<String, V>,
    right: &'a BTreeMap<String, W>,
) -> impl Iterator<Item = &'a String> {
    left.keys().filter(|k| !right.contains_key(*k))
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
