//! Resource router — an immutable, path-ordered route table and the
//! dispatcher that selects exactly one handler per request.
//!
//! Routes carry a tagged [`HandlerId`] rather than function pointers;
//! [`Router::dispatch`] resolves the tag through a single `match`. The
//! table must stay sorted by path in ascending byte order — transport
//! lookup structures rely on that ordering, so it is a hard invariant
//! (covered by a test), not a style choice.

use std::sync::Arc;

use saulhub_domain::message::{Method, Request, Response, Status};

use crate::ports::DeviceRegistry;
use crate::services::registry_service::RegistryService;
use crate::services::sense_service::SenseService;

/// Tags naming the handler a route resolves to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerId {
    /// `GET /hum`
    Humidity,
    /// `GET /press`
    Pressure,
    /// `GET /saul/cnt`
    DeviceCount,
    /// `POST /saul/dev`
    DeviceInfo,
    /// `GET /sensor?class=<int>`
    SensorByClass,
    /// `GET /servo`
    Servo,
    /// `GET /temp`
    Temperature,
    /// `GET /voltage`
    Voltage,
}

/// One entry of the route table.
#[derive(Debug, Clone, Copy)]
pub struct Route {
    /// Resource path.
    pub path: &'static str,
    /// Allowed method.
    pub method: Method,
    /// Handler this route resolves to.
    pub handler: HandlerId,
}

/// The route table. Sorted by path, ascending byte order.
pub const ROUTES: [Route; 8] = [
    Route {
        path: "/hum",
        method: Method::Get,
        handler: HandlerId::Humidity,
    },
    Route {
        path: "/press",
        method: Method::Get,
        handler: HandlerId::Pressure,
    },
    Route {
        path: "/saul/cnt",
        method: Method::Get,
        handler: HandlerId::DeviceCount,
    },
    Route {
        path: "/saul/dev",
        method: Method::Post,
        handler: HandlerId::DeviceInfo,
    },
    Route {
        path: "/sensor",
        method: Method::Get,
        handler: HandlerId::SensorByClass,
    },
    Route {
        path: "/servo",
        method: Method::Get,
        handler: HandlerId::Servo,
    },
    Route {
        path: "/temp",
        method: Method::Get,
        handler: HandlerId::Temperature,
    },
    Route {
        path: "/voltage",
        method: Method::Get,
        handler: HandlerId::Voltage,
    },
];

/// Dispatches requests to the services, sharing one registry instance.
pub struct Router<R> {
    sense: SenseService<Arc<R>>,
    info: RegistryService<Arc<R>>,
}

impl<R: DeviceRegistry> Router<R> {
    /// Create a router over the given registry.
    pub fn new(registry: R) -> Self {
        let registry = Arc::new(registry);
        Self {
            sense: SenseService::new(Arc::clone(&registry)),
            info: RegistryService::new(registry),
        }
    }

    /// Route a request to its handler and return the single response.
    ///
    /// Unknown paths answer not-found and a known path with the wrong
    /// method answers bad-request; the transport layer normally filters
    /// both before they reach this core, but dispatch stays total.
    #[tracing::instrument(skip(self, request), fields(path = %request.path))]
    #[must_use]
    pub fn dispatch(&self, request: &Request) -> Response {
        let Some(route) = ROUTES.iter().find(|route| route.path == request.path) else {
            return Response::empty(Status::NotFound);
        };
        if route.method != request.method {
            return Response::empty(Status::BadRequest);
        }

        let capacity = request.capacity;
        match route.handler {
            HandlerId::Humidity => self.sense.humidity(capacity),
            HandlerId::Pressure => self.sense.pressure(capacity),
            HandlerId::DeviceCount => self.info.device_count(capacity),
            HandlerId::DeviceInfo => self.info.device_info(&request.payload, capacity),
            HandlerId::SensorByClass => {
                self.sense.respond_by_query(request.query.as_deref(), capacity)
            }
            HandlerId::Servo => self.sense.servo(capacity),
            HandlerId::Temperature => self.sense.temperature(capacity),
            HandlerId::Voltage => self.sense.voltage(capacity),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use saulhub_domain::class::SensorClass;
    use saulhub_domain::device::DeviceHandle;
    use saulhub_domain::error::RegistryError;
    use saulhub_domain::reading::Reading;

    struct FakeRegistry {
        devices: Vec<(SensorClass, &'static str, Reading)>,
    }

    impl DeviceRegistry for FakeRegistry {
        fn find_by_index(&self, index: usize) -> Option<DeviceHandle> {
            self.devices
                .get(index)
                .map(|(class, name, _)| DeviceHandle {
                    position: index,
                    class: *class,
                    name: (*name).to_string(),
                })
        }

        fn find_by_class(&self, class: SensorClass) -> Option<DeviceHandle> {
            self.devices
                .iter()
                .position(|(c, _, _)| *c == class)
                .and_then(|index| self.find_by_index(index))
        }

        fn count(&self) -> usize {
            self.devices.len()
        }

        fn read(&self, device: &DeviceHandle) -> Result<Reading, RegistryError> {
            Ok(self.devices[device.position].2.clone())
        }
    }

    fn router() -> Router<FakeRegistry> {
        Router::new(FakeRegistry {
            devices: vec![
                (SensorClass::SenseTemp, "bme280", Reading::single(2215, -2)),
                (SensorClass::SenseHum, "sht31", Reading::single(40, 0)),
                (SensorClass::ActServo, "pan servo", Reading::single(90, 0)),
            ],
        })
    }

    #[test]
    fn should_keep_route_table_sorted_by_path() {
        assert!(
            ROUTES.windows(2).all(|pair| pair[0].path < pair[1].path),
            "route table must stay in ascending path order"
        );
    }

    #[test]
    fn should_keep_route_paths_unique() {
        for (i, route) in ROUTES.iter().enumerate() {
            assert!(
                ROUTES[i + 1..].iter().all(|other| other.path != route.path),
                "duplicate route path {}",
                route.path
            );
        }
    }

    #[test]
    fn should_dispatch_temperature_route() {
        let response = router().dispatch(&Request::get("/temp", 64));
        assert_eq!(response.status, Status::Content);
        assert_eq!(response.payload_str(), Some("2215"));
    }

    #[test]
    fn should_dispatch_count_route() {
        let response = router().dispatch(&Request::get("/saul/cnt", 64));
        assert_eq!(response.status, Status::Content);
        assert_eq!(response.payload_str(), Some("3"));
    }

    #[test]
    fn should_dispatch_device_info_route() {
        let response = router().dispatch(&Request::post("/saul/dev", *b"1", 64));
        assert_eq!(response.status, Status::NoContent);
        assert_eq!(response.payload_str(), Some("1,SENSE_HUM,sht31\n"));
    }

    #[test]
    fn should_dispatch_selection_query_route() {
        let query = format!("class={}", SensorClass::ActServo.code());
        let response = router().dispatch(&Request::get("/sensor", 64).with_query(query));
        assert_eq!(response.status, Status::Content);
        assert_eq!(response.payload_str(), Some("90"));
    }

    #[test]
    fn should_answer_not_found_for_missing_class_device() {
        let response = router().dispatch(&Request::get("/voltage", 64));
        assert_eq!(response.status, Status::NotFound);
        assert_eq!(response.payload_str(), Some("device not found"));
    }

    #[test]
    fn should_reject_wrong_method_on_known_path() {
        let response = router().dispatch(&Request::post("/temp", Vec::new(), 64));
        assert_eq!(response.status, Status::BadRequest);
        assert!(response.payload.is_empty());
    }

    #[test]
    fn should_reject_get_on_device_info_path() {
        let response = router().dispatch(&Request::get("/saul/dev", 64));
        assert_eq!(response.status, Status::BadRequest);
    }

    #[test]
    fn should_answer_not_found_for_unknown_path() {
        let response = router().dispatch(&Request::get("/nope", 64));
        assert_eq!(response.status, Status::NotFound);
        assert!(response.payload.is_empty());
    }
}
