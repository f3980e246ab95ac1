use chrono::NaiveDate;
use rusqlite::{params_from_iter, types::Value, Connection, OptionalExtension};

use crate::db::{with_conn, with_transaction, DbPool};
use crate::error::{AppError, Result};
use crate::models::{FromSqliteRow, Student, StudentChanges, StudentFilter};

pub const DUPLICATE_EMAIL_MESSAGE: &str = "Aluno com este email já cadastrado";

#[derive(Clone)]
pub struct StudentRepository {
    pool: DbPool,
}

fn select_by_id(conn: &Connection, id: i64) -> rusqlite::Result<Option<Student>> {
    let sql = format!("SELECT {} FROM alunos WHERE id = ?", Student::COLUMNS);
    conn.query_row(&sql, [id], Student::from_row).optional()
}

fn email_taken(conn: &Connection, email: &str, except_id: Option<i64>) -> rusqlite::Result<bool> {
    conn.query_row(
        "SELECT COUNT(*) > 0 FROM alunos WHERE email = ?1 AND (?2 IS NULL OR id != ?2)",
        rusqlite::params![email, except_id],
        |row| row.get(0),
    )
}

impl StudentRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Student>> {
        with_conn(&self.pool, move |conn| Ok(select_by_id(conn, id)?)).await
    }

    pub async fn find_all(&self) -> Result<Vec<Student>> {
        with_conn(&self.pool, |conn| {
            let sql = format!("SELECT {} FROM alunos ORDER BY id", Student::COLUMNS);
            let mut stmt = conn.prepare(&sql)?;
            let students = stmt
                .query_map([], Student::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(students)
        })
        .await
    }

    pub async fn exists(&self, id: i64) -> Result<bool> {
        with_conn(&self.pool, move |conn| {
            let found: bool = conn.query_row(
                "SELECT COUNT(*) > 0 FROM alunos WHERE id = ?",
                [id],
                |row| row.get(0),
            )?;
            Ok(found)
        })
        .await
    }

    /// Inserts an active student. The email check and the insert share one
    /// transaction, so a duplicate never reaches the table.
    pub async fn create(
        &self,
        name: &str,
        surname: &str,
        email: &str,
        phone: &str,
        birth_date: NaiveDate,
    ) -> Result<Student> {
        let mut student = Student {
            id: 0,
            name: name.to_string(),
            surname: surname.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            birth_date,
            active: 1,
        };

        with_transaction(&self.pool, move |tx| {
            if email_taken(tx, &student.email, None)? {
                return Err(AppError::validation(DUPLICATE_EMAIL_MESSAGE));
            }

            tx.execute(
                "INSERT INTO alunos (nome, sobrenome, email, telefone, data_nascimento, ativo)
                 VALUES (?, ?, ?, ?, ?, ?)",
                rusqlite::params![
                    student.name,
                    student.surname,
                    student.email,
                    student.phone,
                    student.birth_date,
                    student.active
                ],
            )?;
            student.id = tx.last_insert_rowid();
            Ok(student)
        })
        .await
    }

    /// Every supplied field must match exactly; absent fields are not
    /// constrained.
    pub async fn filter(
        &self,
        filter: StudentFilter,
        birth_date: Option<NaiveDate>,
    ) -> Result<Vec<Student>> {
        with_conn(&self.pool, move |conn| {
            let mut clauses: Vec<&str> = Vec::new();
            let mut values: Vec<Value> = Vec::new();

            if let Some(id) = filter.id {
                clauses.push("id = ?");
                values.push(Value::Integer(id));
            }
            if let Some(name) = filter.name {
                clauses.push("nome = ?");
                values.push(Value::Text(name));
            }
            if let Some(surname) = filter.surname {
                clauses.push("sobrenome = ?");
                values.push(Value::Text(surname));
            }
            if let Some(email) = filter.email {
                clauses.push("email = ?");
                values.push(Value::Text(email));
            }
            if let Some(phone) = filter.phone {
                clauses.push("telefone = ?");
                values.push(Value::Text(phone));
            }
            if let Some(date) = birth_date {
                clauses.push("data_nascimento = ?");
                values.push(Value::Text(date.format("%Y-%m-%d").to_string()));
            }
            if let Some(active) = filter.active {
                clauses.push("ativo = ?");
                values.push(Value::Integer(active));
            }

            let mut sql = format!("SELECT {} FROM alunos", Student::COLUMNS);
            if !clauses.is_empty() {
                sql.push_str(" WHERE ");
                sql.push_str(&clauses.join(" AND "));
            }
            sql.push_str(" ORDER BY id");

            let mut stmt = conn.prepare(&sql)?;
            let students = stmt
                .query_map(params_from_iter(values.iter()), Student::from_row)?
                .collect::<rusqlite::Result<Vec<_>>>()?;
            Ok(students)
        })
        .await
    }

    /// Applies the supplied fields. Returns `false` when the student does not
    /// exist.
    pub async fn update(&self, id: i64, changes: StudentChanges) -> Result<bool> {
        with_transaction(&self.pool, move |tx| {
            if select_by_id(tx, id)?.is_none() {
                return Ok(false);
            }
            if changes.is_empty() {
                return Ok(true);
            }

            if let Some(email) = &changes.email {
                if email_taken(tx, email, Some(id))? {
                    return Err(AppError::validation(DUPLICATE_EMAIL_MESSAGE));
                }
            }

            let mut updates: Vec<&str> = Vec::new();
            let mut values: Vec<Value> = Vec::new();

            if let Some(name) = changes.name {
                updates.push("nome = ?");
                values.push(Value::Text(name));
            }
            if let Some(surname) = changes.surname {
                updates.push("sobrenome = ?");
                values.push(Value::Text(surname));
            }
            if let Some(email) = changes.email {
                updates.push("email = ?");
                values.push(Value::Text(email));
            }
            if let Some(phone) = changes.phone {
                updates.push("telefone = ?");
                values.push(Value::Text(phone));
            }
            if let Some(date) = changes.birth_date {
                updates.push("data_nascimento = ?");
                values.push(Value::Text(date.format("%Y-%m-%d").to_string()));
            }
            values.push(Value::Integer(id));

            let sql = format!("UPDATE alunos SET {} WHERE id = ?", updates.join(", "));
            tx.execute(&sql, params_from_iter(values.iter()))?;
            Ok(true)
        })
        .await
    }

    pub async fn set_active(&self, id: i64, active: bool) -> Result<bool> {
        with_transaction(&self.pool, move |tx| {
            let rows = tx.execute(
                "UPDATE alunos SET ativo = ? WHERE id = ?",
                rusqlite::params![i64::from(active), id],
            )?;
            Ok(rows > 0)
        })
        .await
    }
}
