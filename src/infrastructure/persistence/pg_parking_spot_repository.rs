//! PostgreSQL implementation of the parking spot repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use crate::domain::entities::ParkingSpot;
use crate::domain::repositories::ParkingSpotRepository;
use crate::error::AppError;

/// PostgreSQL repository for parking spot storage.
///
/// Uses SQLx prepared statements. Every write is a single statement, so each
/// mutation is atomic without explicit transaction management. Unique
/// violations bubble up through `From<sqlx::Error>` as 409 conflicts.
pub struct PgParkingSpotRepository {
    pool: Arc<PgPool>,
}

impl PgParkingSpotRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ParkingSpotRepository for PgParkingSpotRepository {
    async fn save(&self, spot: ParkingSpot) -> Result<ParkingSpot, AppError> {
        // Upsert keyed on the primary key. The update arm deliberately leaves
        // registration_date untouched: it is immutable post-creation.
        let saved = sqlx::query_as::<_, ParkingSpot>(
            r#"
            INSERT INTO parking_spots (
                id, parking_spot_number, licence_plate_car, model_car, brand_car,
                color_car, responsible_name, apartment, block, registration_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            ON CONFLICT (id) DO UPDATE SET
                parking_spot_number = EXCLUDED.parking_spot_number,
                licence_plate_car   = EXCLUDED.licence_plate_car,
                model_car           = EXCLUDED.model_car,
                brand_car           = EXCLUDED.brand_car,
                color_car           = EXCLUDED.color_car,
                responsible_name    = EXCLUDED.responsible_name,
                apartment           = EXCLUDED.apartment,
                block               = EXCLUDED.block
            RETURNING id, parking_spot_number, licence_plate_car, model_car, brand_car,
                      color_car, responsible_name, apartment, block, registration_date
            "#,
        )
        .bind(spot.id)
        .bind(&spot.parking_spot_number)
        .bind(&spot.licence_plate_car)
        .bind(&spot.model_car)
        .bind(&spot.brand_car)
        .bind(&spot.color_car)
        .bind(&spot.responsible_name)
        .bind(&spot.apartment)
        .bind(&spot.block)
        .bind(spot.registration_date)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(saved)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError> {
        let row = sqlx::query_as::<_, ParkingSpot>(
            r#"
            SELECT id, parking_spot_number, licence_plate_car, model_car, brand_car,
                   color_car, responsible_name, apartment, block, registration_date
            FROM parking_spots
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row)
    }

    async fn find_all(&self) -> Result<Vec<ParkingSpot>, AppError> {
        let rows = sqlx::query_as::<_, ParkingSpot>(
            r#"
            SELECT id, parking_spot_number, licence_plate_car, model_car, brand_car,
                   color_car, responsible_name, apartment, block, registration_date
            FROM parking_spots
            ORDER BY registration_date
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows)
    }

    async fn delete(&self, spot: ParkingSpot) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM parking_spots WHERE id = $1")
            .bind(spot.id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Parking Spot not found"));
        }

        Ok(())
    }

    async fn exists_by_licence_plate_car(
        &self,
        licence_plate_car: &str,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM parking_spots WHERE licence_plate_car = $1)",
        )
        .bind(licence_plate_car)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn exists_by_parking_spot_number(
        &self,
        parking_spot_number: &str,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM parking_spots WHERE parking_spot_number = $1)",
        )
        .bind(parking_spot_number)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }

    async fn exists_by_apartment_and_block(
        &self,
        apartment: &str,
        block: &str,
    ) -> Result<bool, AppError> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM parking_spots WHERE apartment = $1 AND block = $2)",
        )
        .bind(apartment)
        .bind(block)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(exists)
    }
}
