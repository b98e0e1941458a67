//! SQLite-backed entity store (persistent variant).
//!
//! # Responsibility
//! - Fulfil the append/scan contract against durable tables.
//! - Keep SQL details inside the store boundary.
//!
//! # Invariants
//! - Reads are ordered by `seq`, the autoincrement append counter.
//! - Rows that fail to decode are reported, never skipped.

use crate::model::{Comment, Person, Post};
use crate::repo::entity_repo::{EntityReader, EntityRepository, RepoError, RepoResult};
use rusqlite::{params, Connection, Row};
use uuid::Uuid;

const REQUIRED_TABLES: [&str; 3] = ["people", "posts", "comments"];

/// Entity store over a migrated SQLite connection.
pub struct SqliteEntityRepository {
    conn: Connection,
}

impl SqliteEntityRepository {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    ///
    /// # Errors
    /// - `RepoError::MissingRequiredTable` when migrations were not applied.
    pub fn try_new(conn: Connection) -> RepoResult<Self> {
        for table in REQUIRED_TABLES {
            if !table_exists(&conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }
}

impl EntityReader for SqliteEntityRepository {
    fn people(&self) -> RepoResult<Vec<Person>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, name, email, age FROM people ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut people = Vec::new();
        while let Some(row) = rows.next()? {
            people.push(Person {
                id: parse_uuid(row, "people", "id")?,
                name: row.get("name")?,
                email: row.get("email")?,
                age: row.get("age")?,
            });
        }
        Ok(people)
    }

    fn posts(&self) -> RepoResult<Vec<Post>> {
        let mut stmt = self.conn.prepare(
            "SELECT id, title, body, published, author FROM posts ORDER BY seq ASC;",
        )?;
        let mut rows = stmt.query([])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            let published = match row.get::<_, i64>("published")? {
                0 => false,
                1 => true,
                other => {
                    return Err(RepoError::InvalidData(format!(
                        "invalid published value `{other}` in posts.published"
                    )));
                }
            };
            posts.push(Post {
                id: parse_uuid(row, "posts", "id")?,
                title: row.get("title")?,
                body: row.get("body")?,
                published,
                author: parse_uuid(row, "posts", "author")?,
            });
        }
        Ok(posts)
    }

    fn comments(&self) -> RepoResult<Vec<Comment>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, text, author, post FROM comments ORDER BY seq ASC;")?;
        let mut rows = stmt.query([])?;
        let mut comments = Vec::new();
        while let Some(row) = rows.next()? {
            comments.push(Comment {
                id: parse_uuid(row, "comments", "id")?,
                text: row.get("text")?,
                author: parse_uuid(row, "comments", "author")?,
                post: parse_uuid(row, "comments", "post")?,
            });
        }
        Ok(comments)
    }
}

impl EntityRepository for SqliteEntityRepository {
    fn append_person(&mut self, person: &Person) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO people (id, name, email, age) VALUES (?1, ?2, ?3, ?4);",
            params![
                person.id.to_string(),
                person.name.as_str(),
                person.email.as_str(),
                person.age,
            ],
        )?;
        Ok(())
    }

    fn append_post(&mut self, post: &Post) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO posts (id, title, body, published, author)
             VALUES (?1, ?2, ?3, ?4, ?5);",
            params![
                post.id.to_string(),
                post.title.as_str(),
                post.body.as_str(),
                bool_to_int(post.published),
                post.author.to_string(),
            ],
        )?;
        Ok(())
    }

    fn append_comment(&mut self, comment: &Comment) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO comments (id, text, author, post) VALUES (?1, ?2, ?3, ?4);",
            params![
                comment.id.to_string(),
                comment.text.as_str(),
                comment.author.to_string(),
                comment.post.to_string(),
            ],
        )?;
        Ok(())
    }
}

fn parse_uuid(row: &Row<'_>, table: &str, column: &str) -> RepoResult<Uuid> {
    let text: String = row.get(column)?;
    Uuid::parse_str(&text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{text}` in {table}.{column}"))
    })
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
