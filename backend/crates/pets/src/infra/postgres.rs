//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{InteractionId, PetId};
use sqlx::PgPool;

use crate::domain::entities::{Interaction, InteractionKind, NewPet, Pet};
use crate::domain::repository::{InteractionRepository, PetRepository};
use crate::domain::value_objects::PetName;
use crate::error::{PetsError, PetsResult};

/// PostgreSQL-backed repository
#[derive(Clone)]
pub struct PgPetRepository {
    pool: PgPool,
}

impl PgPetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Round-trip to the database, used by health checks
    pub async fn ping(&self) -> PetsResult<()> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.pool)
            .await?;
        Ok(())
    }
}

// ============================================================================
// Pet Repository Implementation
// ============================================================================

impl PetRepository for PgPetRepository {
    async fn create(&self, pet: &NewPet) -> PetsResult<Pet> {
        let row = sqlx::query_as::<_, PetRow>(
            r#"
            INSERT INTO pets (
                pet_name,
                birthday,
                hunger_level,
                happiness_level,
                last_interacted_with_date
            ) VALUES ($1, $2, $3, $4, $5)
            RETURNING
                pet_id,
                pet_name,
                birthday,
                hunger_level,
                happiness_level,
                last_interacted_with_date
            "#,
        )
        .bind(pet.name.as_str())
        .bind(pet.birthday)
        .bind(pet.hunger_level)
        .bind(pet.happiness_level)
        .bind(pet.last_interacted_with_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_pet())
    }

    async fn find_by_id(&self, pet_id: PetId) -> PetsResult<Option<Pet>> {
        let row = sqlx::query_as::<_, PetRow>(
            r#"
            SELECT
                pet_id,
                pet_name,
                birthday,
                hunger_level,
                happiness_level,
                last_interacted_with_date
            FROM pets
            WHERE pet_id = $1
            "#,
        )
        .bind(pet_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PetRow::into_pet))
    }

    async fn list(&self) -> PetsResult<Vec<Pet>> {
        let rows = sqlx::query_as::<_, PetRow>(
            r#"
            SELECT
                pet_id,
                pet_name,
                birthday,
                hunger_level,
                happiness_level,
                last_interacted_with_date
            FROM pets
            ORDER BY pet_id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(PetRow::into_pet).collect())
    }

    async fn delete(&self, pet_id: PetId) -> PetsResult<Option<Pet>> {
        // playtimes/feedings/scoldings rows go via ON DELETE CASCADE
        let row = sqlx::query_as::<_, PetRow>(
            r#"
            DELETE FROM pets
            WHERE pet_id = $1
            RETURNING
                pet_id,
                pet_name,
                birthday,
                hunger_level,
                happiness_level,
                last_interacted_with_date
            "#,
        )
        .bind(pet_id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(PetRow::into_pet))
    }
}

// ============================================================================
// Interaction Repository Implementation
// ============================================================================

impl InteractionRepository for PgPetRepository {
    async fn record(
        &self,
        pet: &Pet,
        kind: InteractionKind,
        when: DateTime<Utc>,
    ) -> PetsResult<Interaction> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r#"
            UPDATE pets SET
                hunger_level = $2,
                happiness_level = $3,
                last_interacted_with_date = $4
            WHERE pet_id = $1
            "#,
        )
        .bind(pet.id.get())
        .bind(pet.hunger_level)
        .bind(pet.happiness_level)
        .bind(pet.last_interacted_with_date)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            tx.rollback().await?;
            tracing::warn!(pet_id = %pet.id, interaction = %kind, "Pet vanished before interaction was stored");
            return Err(PetsError::PetNotFound(pet.id));
        }

        // Table and column names come from a closed enum, never from input.
        let insert = format!(
            "INSERT INTO {table} (pet_id, occurred_at) VALUES ($1, $2) RETURNING {id}",
            table = kind.table(),
            id = kind.id_column(),
        );
        let interaction_id = sqlx::query_scalar::<_, i64>(&insert)
            .bind(pet.id.get())
            .bind(when)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Interaction {
            id: InteractionId::from_i64(interaction_id),
            pet_id: pet.id,
            kind,
            when,
        })
    }

    async fn list_for_pet(
        &self,
        pet_id: PetId,
        kind: InteractionKind,
    ) -> PetsResult<Vec<Interaction>> {
        let select = format!(
            "SELECT {id} AS interaction_id, pet_id, occurred_at FROM {table} WHERE pet_id = $1 ORDER BY {id}",
            table = kind.table(),
            id = kind.id_column(),
        );
        let rows = sqlx::query_as::<_, InteractionRow>(&select)
            .bind(pet_id.get())
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(|r| r.into_interaction(kind)).collect())
    }
}

// Internal row types for sqlx mapping
#[derive(sqlx::FromRow)]
struct PetRow {
    pet_id: i64,
    pet_name: String,
    birthday: DateTime<Utc>,
    hunger_level: i32,
    happiness_level: i32,
    last_interacted_with_date: DateTime<Utc>,
}

impl PetRow {
    fn into_pet(self) -> Pet {
        Pet {
            id: PetId::from_i64(self.pet_id),
            name: PetName::from_db(self.pet_name),
            birthday: self.birthday,
            hunger_level: self.hunger_level,
            happiness_level: self.happiness_level,
            last_interacted_with_date: self.last_interacted_with_date,
        }
    }
}

#[derive(sqlx::FromRow)]
struct InteractionRow {
    interaction_id: i64,
    pet_id: i64,
    occurred_at: DateTime<Utc>,
}

impl InteractionRow {
    fn into_interaction(self, kind: InteractionKind) -> Interaction {
        Interaction {
            id: InteractionId::from_i64(self.interaction_id),
            pet_id: PetId::from_i64(self.pet_id),
            kind,
            when: self.occurred_at,
        }
    }
}
