use aviasky_catalog::{destinations, hotel_cities, locations};
use aviasky_catalog::{HotelCity, Location, PopularDestination};
use aviasky_core::ServiceConfig;
use aviasky_offer::{FlightGenerator, FlightOffer, FlightSearch, HotelGenerator, HotelOffer, HotelSearch};
use rand::Rng;
use serde::Serialize;
use std::str::FromStr;

use crate::error::HandlerError;
use crate::event::{Event, HandlerResponse};

pub const DEFAULT_ORIGIN: &str = "MOW";
pub const DEFAULT_DESTINATION: &str = "PAR";
pub const DEFAULT_HOTEL_CITY: &str = "Москва";
pub const DEFAULT_GUESTS: u32 = 2;

/// Values of the `action` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cities,
    Search,
    Popular,
    Hotels,
    HotelCities,
    Telegram,
}

impl FromStr for Action {
    type Err = HandlerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cities" => Ok(Action::Cities),
            "search" => Ok(Action::Search),
            "popular" => Ok(Action::Popular),
            "hotels" => Ok(Action::Hotels),
            "hotel_cities" => Ok(Action::HotelCities),
            "telegram" => Ok(Action::Telegram),
            other => Err(HandlerError::UnknownAction(other.to_string())),
        }
    }
}

// ============================================================================
// Response payloads
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CitiesResponse<T: Serialize + 'static> {
    pub cities: Vec<&'static T>,
}

#[derive(Debug, Serialize)]
pub struct DestinationsResponse {
    pub destinations: Vec<&'static PopularDestination>,
}

#[derive(Debug, Serialize)]
pub struct FlightSearchResponse<'a> {
    pub flights: Vec<FlightOffer>,
    pub search_params: FlightSearchParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct FlightSearchParams<'a> {
    pub origin: &'a str,
    pub destination: &'a str,
    pub date: Option<&'a str>,
}

#[derive(Debug, Serialize)]
pub struct HotelSearchResponse<'a> {
    pub hotels: Vec<HotelOffer>,
    pub search_params: HotelSearchParams<'a>,
}

#[derive(Debug, Serialize)]
pub struct HotelSearchParams<'a> {
    pub city: &'a str,
    pub checkin: Option<&'a str>,
    pub checkout: Option<&'a str>,
    pub guests: u32,
    pub nights: u32,
    /// True when the dates were missing or malformed and the default stay was used
    pub nights_defaulted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nights_fallback_reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TelegramResponse<'a> {
    pub telegram_url: &'a str,
}

// ============================================================================
// Handler
// ============================================================================

/// Stateless handler for every action; configuration is fixed at construction.
pub struct TravelHandler {
    config: ServiceConfig,
    flights: FlightGenerator,
    hotels: HotelGenerator,
}

impl TravelHandler {
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            flights: FlightGenerator::new(&config.pricing),
            hotels: HotelGenerator::new(&config.pricing),
            config,
        }
    }

    pub fn handle(&self, event: &Event) -> HandlerResponse {
        self.handle_with_rng(event, &mut rand::thread_rng())
    }

    /// Same as [`handle`](Self::handle) with a caller-supplied random source.
    pub fn handle_with_rng<R: Rng + ?Sized>(&self, event: &Event, rng: &mut R) -> HandlerResponse {
        self.dispatch(event, rng)
            .unwrap_or_else(HandlerError::into_response)
    }

    fn dispatch<R: Rng + ?Sized>(&self, event: &Event, rng: &mut R) -> Result<HandlerResponse, HandlerError> {
        if event.is_method("OPTIONS") {
            return Ok(HandlerResponse::preflight());
        }
        if !event.is_method("GET") {
            return Err(HandlerError::MethodNotAllowed(event.http_method.clone()));
        }

        let action: Action = event.query_param("action").unwrap_or("cities").parse()?;
        tracing::debug!(?action, "Dispatching request");

        match action {
            Action::Cities => self.cities(event),
            Action::Search => self.search_flights(event, rng),
            Action::Popular => self.popular(event),
            Action::Hotels => self.search_hotels(event, rng),
            Action::HotelCities => self.hotel_cities(event),
            Action::Telegram => self.telegram(),
        }
    }

    fn cities(&self, event: &Event) -> Result<HandlerResponse, HandlerError> {
        let cities: Vec<&'static Location> = locations::search(event.query_param("q").unwrap_or(""));
        HandlerResponse::ok(&CitiesResponse { cities })
    }

    fn hotel_cities(&self, event: &Event) -> Result<HandlerResponse, HandlerError> {
        let cities: Vec<&'static HotelCity> = hotel_cities::search(event.query_param("q").unwrap_or(""));
        HandlerResponse::ok(&CitiesResponse { cities })
    }

    fn popular(&self, event: &Event) -> Result<HandlerResponse, HandlerError> {
        let destinations = destinations::search(event.query_param("q").unwrap_or(""));
        HandlerResponse::ok(&DestinationsResponse { destinations })
    }

    fn search_flights<R: Rng + ?Sized>(&self, event: &Event, rng: &mut R) -> Result<HandlerResponse, HandlerError> {
        let search = FlightSearch {
            origin: event.query_param_or(&["from", "origin"], DEFAULT_ORIGIN),
            destination: event.query_param_or(&["to", "destination"], DEFAULT_DESTINATION),
            date: event.query_param("date").or_else(|| event.query_param("depart_date")),
        };
        let flights = self.flights.generate(&search, rng);

        HandlerResponse::ok(&FlightSearchResponse {
            flights,
            search_params: FlightSearchParams {
                origin: search.origin,
                destination: search.destination,
                date: search.date,
            },
        })
    }

    fn search_hotels<R: Rng + ?Sized>(&self, event: &Event, rng: &mut R) -> Result<HandlerResponse, HandlerError> {
        let search = HotelSearch {
            city: event.query_param_or(&["city"], DEFAULT_HOTEL_CITY),
            checkin: event.query_param("checkin"),
            checkout: event.query_param("checkout"),
            guests: event.query_param_as("guests").unwrap_or(DEFAULT_GUESTS),
        };
        let results = self.hotels.generate(&search, rng);

        HandlerResponse::ok(&HotelSearchResponse {
            search_params: HotelSearchParams {
                city: search.city,
                checkin: search.checkin,
                checkout: search.checkout,
                guests: search.guests,
                nights: results.stay.nights(),
                nights_defaulted: results.stay.is_fallback(),
                nights_fallback_reason: results.stay.fallback_reason().map(|r| r.to_string()),
            },
            hotels: results.hotels,
        })
    }

    fn telegram(&self) -> Result<HandlerResponse, HandlerError> {
        HandlerResponse::ok(&TelegramResponse {
            telegram_url: &self.config.telegram.bot_url,
        })
    }
}
