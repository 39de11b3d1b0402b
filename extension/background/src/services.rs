use {
	common::{
		AppError, BackgroundReply, Config, ServiceReply, ToBackground,
		services::{
			API_KEY_HEADER, GEMINI_SERVICE, GEOCODER_SERVICE, GenerateContentRequest, GenerateContentResponse, GeocodeQuery, GeocodeResponse, GeocodedLocation,
			LocationContext, check_status,
		},
	},
	reqwest::Client,
};

/// HTTP side of the background worker. Every failure is turned into an
/// [`AppError`] and sent back to the popup, never retried.
pub struct Services {
	client: Client,
	config: Config,
}

impl Services {
	pub fn new(config: Config) -> Self {
		Self { client: Client::new(), config }
	}

	pub async fn handle(&self, request: ToBackground) -> BackgroundReply {
		let reply = match request {
			ToBackground::Geocode(query) => self.geocode(&query).await.map(ServiceReply::Location),
			ToBackground::DescribeLocation(context) => self.describe_location(&context).await.map(ServiceReply::Narrative),
		};
		if let Err(e) = &reply {
			log::error!("[background] {e}");
		}
		reply
	}

	async fn geocode(&self, query: &GeocodeQuery) -> Result<GeocodedLocation, AppError> {
		let url = query.request_url(&self.config.geocoder_url, self.config.geocoder_key()?)?;
		log::info!("[background] Geocoding {:?}", query.as_str());

		let response = self.client.get(url).send().await.map_err(|e| network(GEOCODER_SERVICE, &e))?;
		check_status(GEOCODER_SERVICE, response.status().as_u16())?;
		let body = response.json::<GeocodeResponse>().await.map_err(|_| AppError::InvalidResponse(GEOCODER_SERVICE.to_owned()))?;
		body.into_location(query)
	}

	async fn describe_location(&self, context: &LocationContext) -> Result<String, AppError> {
		let api_key = self.config.gemini_key()?;
		log::info!("[background] Requesting socioeconomic background");

		let response = self
			.client
			.post(&self.config.gemini_url)
			.header(API_KEY_HEADER, api_key)
			.json(&GenerateContentRequest::for_context(context))
			.send()
			.await
			.map_err(|e| network(GEMINI_SERVICE, &e))?;
		check_status(GEMINI_SERVICE, response.status().as_u16())?;
		let body = response.json::<GenerateContentResponse>().await.map_err(|_| AppError::InvalidResponse(GEMINI_SERVICE.to_owned()))?;
		body.into_text()
	}
}

fn network(service: &str, err: &reqwest::Error) -> AppError {
	AppError::Network { service: service.to_owned(), reason: err.to_string() }
}

#[cfg(test)]
mod tests {
	use {super::*, tokio::test};

	#[test]
	async fn missing_keys_fail_before_any_request() {
		let services = Services::new(Config::default());

		let reply = services.handle(ToBackground::Geocode(GeocodeQuery::new("Nairobi").unwrap())).await;
		assert_eq!(reply, Err(AppError::MissingConfiguration("geocoder".to_owned())));

		let context = LocationContext::new("1950", "40.7128", "-74.0060").unwrap();
		let reply = services.handle(ToBackground::DescribeLocation(context)).await;
		assert_eq!(reply, Err(AppError::MissingConfiguration("Gemini".to_owned())));
	}

	#[test]
	async fn unreachable_geocoder_is_a_network_error() {
		let config = Config::builder().geocoder_url("http://127.0.0.1:9/geocode").geocoder_api_key("key").build();
		let reply = Services::new(config).handle(ToBackground::Geocode(GeocodeQuery::new("Nairobi").unwrap())).await;
		assert!(matches!(reply, Err(AppError::Network { service, .. }) if service == GEOCODER_SERVICE));
	}
}
