use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::planet::CreatePlanetDto,
    server::{
        data::planet::PlanetRepository,
        error::{request::RequestError, Error},
        model::db::PlanetModel,
    },
};

pub struct PlanetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PlanetService<'a> {
    /// Creates a new instance of [`PlanetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_planets(&self) -> Result<Vec<PlanetModel>, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        Ok(planet_repo.get_all().await?)
    }

    /// Gets a planet by ID
    ///
    /// # Returns
    /// - `Ok(PlanetModel)`: The planet
    /// - `Err(Error::RequestError(RequestError::PlanetNotFound))`: No planet has this ID
    /// - `Err(Error::DbErr(_))`: The lookup failed
    pub async fn get_planet(&self, planet_id: i32) -> Result<PlanetModel, Error> {
        let planet_repo = PlanetRepository::new(self.db);

        planet_repo
            .get(planet_id)
            .await?
            .ok_or_else(|| RequestError::PlanetNotFound(planet_id).into())
    }

    /// Validates the payload and inserts a new planet
    ///
    /// # Returns
    /// - `Ok(PlanetModel)`: The created planet
    /// - `Err(Error::RequestError(RequestError::IncompletePlanet))`: A field is missing or null
    /// - `Err(Error::Storage(_))`: The insert failed and was rolled back
    pub async fn create_planet(&self, payload: CreatePlanetDto) -> Result<PlanetModel, Error> {
        let (Some(climate), Some(name), Some(resident_id), Some(film_id)) = (
            payload.climate,
            payload.name,
            payload.resident_id,
            payload.film_id,
        ) else {
            return Err(RequestError::IncompletePlanet.into());
        };

        let txn = self.db.begin().await.map_err(Error::Storage)?;

        let planet = PlanetRepository::new(&txn)
            .create(name, Some(climate), resident_id, film_id)
            .await
            .map_err(Error::Storage)?;

        txn.commit().await.map_err(Error::Storage)?;

        tracing::info!(planet_id = %planet.planet_id, "Created planet {}", planet.name);

        Ok(planet)
    }
}
