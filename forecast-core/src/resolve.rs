use crate::{error::LookupError, model::CityMatch, provider::WeatherSource};

/// Resolve free text to the best geocoding match.
///
/// The caller keeps empty input away from here; see [`crate::Session::begin`].
pub async fn resolve(
    source: &dyn WeatherSource,
    city_name: &str,
) -> Result<CityMatch, LookupError> {
    let matches = source.geocode(city_name).await.map_err(|err| {
        tracing::warn!(error = %err, city = city_name, "geocoding request failed");
        LookupError::LocationFetch(err)
    })?;

    let Some(city) = matches.into_iter().next() else {
        tracing::info!(city = city_name, "no geocoding match");
        return Err(LookupError::NotFound);
    };

    tracing::info!(
        query = city_name,
        resolved = %city.label(),
        latitude = city.latitude,
        longitude = city.longitude,
        "resolved city"
    );
    Ok(city)
}
