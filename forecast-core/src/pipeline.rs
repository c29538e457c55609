use crate::{
    aggregate::fetch_daily, error::LookupError, model::Dashboard, provider::WeatherSource,
    resolve::resolve,
};

/// Resolve `city_name`, then fetch and aggregate its forecast.
///
/// The forecast request is only sent once the city has resolved.
pub async fn search(
    source: &dyn WeatherSource,
    city_name: &str,
) -> Result<Dashboard, LookupError> {
    let city = resolve(source, city_name).await?;
    let days = fetch_daily(source, city.latitude, city.longitude).await?;

    Ok(Dashboard { city, days })
}
