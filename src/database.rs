/*!
 * Database access module
 *
 * Wraps the MySQL connection pool and exposes one method per logical
 * storage operation:
 * - list / single lookup of Buku rows, LEFT JOINed with Penulis
 * - single and transactional bulk insert
 * - partial update writing only the columns present in the payload
 * - delete by id
 */

use crate::error::{AppError, AppResult};
use crate::models::{Author, Book, BookInsert};
use sqlx::{MySql, MySqlPool, Pool, QueryBuilder, Row};

#[derive(Clone)]
pub struct Database {
    pool: Pool<MySql>,
}

impl Database {
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = MySqlPool::connect(database_url).await?;
        Ok(Database { pool })
    }

    pub async fn new_with_migrations(database_url: &str) -> AppResult<Self> {
        let pool = MySqlPool::connect(database_url).await?;
        let db = Database { pool };
        db.migrate().await?;
        Ok(db)
    }

    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::migrate!("./migrations").run(&self.pool).await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Buku reads
    // ---------------------------------------------------------------------

    pub async fn list_books(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query(
            r#"
            SELECT Buku.id, Buku.name, Buku.penulisId, Penulis.name AS penulisName
            FROM Buku
            LEFT JOIN Penulis ON Buku.penulisId = Penulis.id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Book {
                id: row.get("id"),
                name: row.get("name"),
                penulis_id: row.get("penulisId"),
                penulis_name: row.get("penulisName"),
            })
            .collect())
    }

    pub async fn get_book_by_id(&self, book_id: i64) -> AppResult<Option<Book>> {
        let row = sqlx::query(
            r#"
            SELECT Buku.id, Buku.name, Buku.penulisId, Penulis.name AS penulisName
            FROM Buku
            LEFT JOIN Penulis ON Buku.penulisId = Penulis.id
            WHERE Buku.id = ?
            "#,
        )
        .bind(book_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|row| Book {
            id: row.get("id"),
            name: row.get("name"),
            penulis_id: row.get("penulisId"),
            penulis_name: row.get("penulisName"),
        }))
    }

    // ---------------------------------------------------------------------
    // Buku writes
    // ---------------------------------------------------------------------

    pub async fn create_book(&self, input: &BookInsert) -> AppResult<Book> {
        let result = sqlx::query("INSERT INTO Buku (name, penulisId) VALUES (?, ?)")
            .bind(&input.name)
            .bind(input.penulis_id)
            .execute(&self.pool)
            .await?;

        let book_id = result.last_insert_id() as i64;
        self.get_book_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::Internal(format!("inserted book {} not readable", book_id)))
    }

    /// Inserts the whole batch inside a single transaction. Any failure
    /// rolls back every row.
    pub async fn create_books(&self, inputs: &[BookInsert]) -> AppResult<Vec<Book>> {
        let mut tx = self.pool.begin().await?;
        let mut book_ids = Vec::with_capacity(inputs.len());

        for input in inputs {
            let result = sqlx::query("INSERT INTO Buku (name, penulisId) VALUES (?, ?)")
                .bind(&input.name)
                .bind(input.penulis_id)
                .execute(&mut *tx)
                .await?;
            book_ids.push(result.last_insert_id() as i64);
        }

        tx.commit().await?;

        let mut books = Vec::with_capacity(book_ids.len());
        for book_id in book_ids {
            let book = self.get_book_by_id(book_id).await?.ok_or_else(|| {
                AppError::Internal(format!("inserted book {} not readable", book_id))
            })?;
            books.push(book);
        }

        Ok(books)
    }

    /// Partial update: only the fields present in the payload are written.
    /// Fails with `NotFound` when the id does not exist; an all-absent
    /// payload performs no write at all.
    pub async fn update_book(&self, book_id: i64, input: &BookInsert) -> AppResult<Book> {
        self.get_book_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("book {} not found", book_id)))?;

        if input.name.is_some() || input.penulis_id.is_some() {
            let mut query_builder = QueryBuilder::<MySql>::new("UPDATE Buku SET ");
            let mut fields = query_builder.separated(", ");

            if let Some(name) = &input.name {
                fields.push("name = ");
                fields.push_bind_unseparated(name);
            }
            if let Some(penulis_id) = input.penulis_id {
                fields.push("penulisId = ");
                fields.push_bind_unseparated(penulis_id);
            }

            query_builder.push(" WHERE id = ").push_bind(book_id);
            query_builder.build().execute(&self.pool).await?;
        }

        self.get_book_by_id(book_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("book {} not found", book_id)))
    }

    /// Delete by id. Deleting an absent id is not an error.
    pub async fn delete_book(&self, book_id: i64) -> AppResult<()> {
        sqlx::query("DELETE FROM Buku WHERE id = ?")
            .bind(book_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    // ---------------------------------------------------------------------
    // Penulis
    // ---------------------------------------------------------------------

    pub async fn create_author(&self, name: &str) -> AppResult<Author> {
        let result = sqlx::query("INSERT INTO Penulis (name) VALUES (?)")
            .bind(name)
            .execute(&self.pool)
            .await?;

        Ok(Author {
            id: result.last_insert_id() as i64,
            name: name.to_string(),
        })
    }
}
