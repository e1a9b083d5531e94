//! # Desk Commands
//!
//! A batch is a JSON array of commands tagged by `op`:
//!
//! ```json
//! [
//!   { "op": "checkIn", "customerInput": { "name": "Dana", "email": "d@x.io" },
//!     "petInput": { "name": "Rex", "type": "dog", "age": 3 }, "daysStay": 2 },
//!   { "op": "addPet", "name": "Tom", "type": "cat", "age": 2 },
//!   { "op": "findPet", "name": "rex" },
//!   { "op": "processAll" },
//!   { "op": "undo" },
//!   { "op": "state" }
//! ]
//! ```
//!
//! Each command yields one [`Response`]; failures never stop the batch.

use kennel_core::{
    Booking, CheckInAttempt, CheckInOptions, CheckInRequest, CoreError, Pet, PetId, PetInput,
    SharedEngine, UndoReport,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{ApiError, ErrorCode};

fn default_days_stay() -> i64 {
    1
}

/// One entry of a command batch.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "op", rename_all = "camelCase")]
pub enum Command {
    /// Full front-desk check-in.
    CheckIn(CheckInRequest),

    /// Register a pet and put it at the back of the intake queue.
    AddPet(PetInput),

    /// Check in the pet at the head of the intake queue.
    ProcessNext {
        #[serde(rename = "daysStay", default = "default_days_stay")]
        days_stay: i64,
    },

    /// Drain the intake queue.
    ProcessAll {
        #[serde(rename = "daysStay", default = "default_days_stay")]
        days_stay: i64,
    },

    /// Reverse the most recent action.
    Undo,

    /// Case-insensitive pet lookup.
    FindPet { name: String },

    /// Engine counters.
    State,
}

impl Command {
    fn name(&self) -> &'static str {
        match self {
            Command::CheckIn(_) => "checkIn",
            Command::AddPet(_) => "addPet",
            Command::ProcessNext { .. } => "processNext",
            Command::ProcessAll { .. } => "processAll",
            Command::Undo => "undo",
            Command::FindPet { .. } => "findPet",
            Command::State => "state",
        }
    }
}

/// Response envelope, one per command.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status: u16,
    #[serde(flatten)]
    pub error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl Response {
    fn ok<T: Serialize>(data: &T) -> Self {
        match serde_json::to_value(data) {
            Ok(value) => Response {
                status: 200,
                error: None,
                data: Some(value),
            },
            Err(e) => Response::from(ApiError::internal(format!("serialization failed: {e}"))),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

impl From<ApiError> for Response {
    fn from(error: ApiError) -> Self {
        Response {
            status: error.code.http_status(),
            error: Some(error),
            data: None,
        }
    }
}

/// Per-pet line of a queue drain.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AttemptView {
    pet_id: Option<PetId>,
    status: u16,
    #[serde(flatten)]
    error: Option<ApiError>,
    #[serde(skip_serializing_if = "Option::is_none")]
    booking: Option<Booking>,
}

impl From<CheckInAttempt> for AttemptView {
    fn from(attempt: CheckInAttempt) -> Self {
        match attempt.outcome {
            Ok(booking) => AttemptView {
                pet_id: attempt.pet_id,
                status: 200,
                error: None,
                booking: Some(booking),
            },
            Err(failure) => {
                let error = ApiError::from(failure);
                AttemptView {
                    pet_id: attempt.pet_id,
                    status: error.code.http_status(),
                    error: Some(error),
                    booking: None,
                }
            }
        }
    }
}

#[derive(Debug, Serialize)]
struct UndoView<'a> {
    message: &'a str,
    #[serde(flatten)]
    report: &'a UndoReport,
}

fn options(days_stay: i64) -> Result<CheckInOptions, ApiError> {
    CheckInOptions::new(days_stay, None).map_err(|e| ApiError::from(CoreError::from(e)))
}

/// Runs one command against the shared engine.
pub fn run_command(shared: &SharedEngine, command: Command) -> Response {
    let op = command.name();
    debug!(op, "Running command");

    let response = match command {
        Command::CheckIn(request) => match shared.with_engine_mut(|e| e.check_in(&request)) {
            Ok(confirmation) => Response::ok(&confirmation),
            Err(e) => ApiError::from(e).into(),
        },
        Command::AddPet(input) => {
            let added = Pet::new(PetId::generate(), &input.name, &input.species, input.age, None)
                .and_then(|pet| shared.with_engine_mut(|e| e.add_pet(pet)));
            match added {
                Ok(pet) => Response::ok(&pet),
                Err(e) => ApiError::from(CoreError::from(e)).into(),
            }
        }
        Command::ProcessNext { days_stay } => match options(days_stay) {
            Ok(opts) => {
                let mut view = AttemptView::from(shared.with_engine_mut(|e| e.process_next(opts)));
                match view.error.take() {
                    Some(error) => error.into(),
                    None => Response::ok(&view),
                }
            }
            Err(e) => e.into(),
        },
        Command::ProcessAll { days_stay } => match options(days_stay) {
            Ok(opts) => {
                let attempts = shared.with_engine_mut(|e| e.process_all(opts));
                let views: Vec<AttemptView> = attempts.into_iter().map(Into::into).collect();
                Response::ok(&views)
            }
            Err(e) => e.into(),
        },
        Command::Undo => match shared.with_engine_mut(|e| e.undo_recent()) {
            Ok(report) => Response::ok(&UndoView {
                message: report.message(),
                report: &report,
            }),
            Err(e) => ApiError::from(e).into(),
        },
        Command::FindPet { name } => match shared.with_engine(|e| e.find_pet_by_name(&name).cloned()) {
            Some(pet) => Response::ok(&pet),
            None => ApiError::new(
                ErrorCode::NotFound,
                format!("No pet named '{}'", name.trim()),
            )
            .into(),
        },
        Command::State => Response::ok(&shared.with_engine(|e| e.state())),
    };

    if response.is_ok() {
        info!(op, status = response.status, "Command succeeded");
    } else {
        info!(op, status = response.status, "Command refused");
    }
    response
}

/// Runs a batch in order, one response per command.
pub fn run_batch(shared: &SharedEngine, commands: Vec<Command>) -> Vec<Response> {
    commands
        .into_iter()
        .map(|command| run_command(shared, command))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use kennel_core::CheckInEngine;

    fn parse(json: &str) -> Vec<Command> {
        serde_json::from_str(json).unwrap()
    }

    fn check_in(pet: &str, species: &str) -> String {
        format!(
            r#"{{ "op": "checkIn",
                 "customerInput": {{ "name": "Dana", "email": "dana@example.com" }},
                 "petInput": {{ "name": "{pet}", "type": "{species}", "age": 3 }},
                 "daysStay": 2 }}"#
        )
    }

    #[test]
    fn test_batch_reports_each_command() {
        let shared = SharedEngine::from_engine(CheckInEngine::with_capacity(1, 0));
        let batch = format!(
            "[{}, {}, {{ \"op\": \"findPet\", \"name\": \"REX\" }}, {{ \"op\": \"state\" }}]",
            check_in("Rex", "dog"),
            check_in("Max", "dog"),
        );

        let responses = run_batch(&shared, parse(&batch));

        assert_eq!(responses.len(), 4);
        assert_eq!(responses[0].status, 200);
        assert_eq!(responses[1].status, 409);
        assert_eq!(responses[2].status, 200);
        let data = responses[3].data.as_ref().unwrap();
        assert_eq!(data["inventory"]["dog_spaces_available"], 0);
        assert_eq!(data["bookingsCount"], 1);
    }

    #[test]
    fn test_error_envelope_is_flat() {
        let shared = SharedEngine::from_engine(CheckInEngine::with_capacity(0, 0));
        let responses = run_batch(&shared, parse(&format!("[{}]", check_in("Rex", "dog"))));

        let json = serde_json::to_value(&responses[0]).unwrap();
        assert_eq!(json["status"], 409);
        assert_eq!(json["code"], "NO_CAPACITY");
        assert_eq!(json["message"], "Sorry, we have no more spots available.");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_undo_and_empty_queue() {
        let shared = SharedEngine::from_engine(CheckInEngine::with_capacity(2, 2));
        let batch = format!(
            r#"[{}, {{ "op": "undo" }}, {{ "op": "processNext" }}, {{ "op": "undo" }}, {{ "op": "undo" }}]"#,
            check_in("Tom", "cat"),
        );

        let responses = run_batch(&shared, parse(&batch));

        let undo = responses[1].data.as_ref().unwrap();
        assert_eq!(undo["message"], "Undid confirmed check-in.");
        assert_eq!(undo["kind"], "check_in_reverted");

        // The desk never queued Tom, so there is nothing to drain.
        assert_eq!(responses[2].status, 409);
        assert_eq!(responses[2].error.as_ref().unwrap().code, ErrorCode::QueueEmpty);

        let undo = responses[3].data.as_ref().unwrap();
        assert_eq!(undo["message"], "Nothing to remove from queue.");
        assert_eq!(responses[4].status, 409);
        assert_eq!(responses[4].error.as_ref().unwrap().message, "Nothing to undo.");
    }

    #[test]
    fn test_repeat_check_in_books_again() {
        let shared = SharedEngine::from_engine(CheckInEngine::with_capacity(2, 0));
        let batch = format!("[{}, {}]", check_in("Rex", "dog"), check_in("Rex", "dog"));

        let responses = run_batch(&shared, parse(&batch));

        assert!(responses.iter().all(Response::is_ok));
        let first = responses[0].data.as_ref().unwrap();
        let second = responses[1].data.as_ref().unwrap();
        assert_eq!(first["spaceId"], "D-1");
        assert_eq!(second["spaceId"], "D-2");
        assert_ne!(first["bookingId"], second["bookingId"]);
    }

    #[test]
    fn test_process_all_lists_each_pet() {
        let shared = SharedEngine::from_engine(CheckInEngine::with_capacity(1, 0));
        let batch = r#"[
            { "op": "addPet", "name": "Rex", "type": "dog", "age": 3 },
            { "op": "addPet", "name": "Max", "species": "DOG", "age": 5 },
            { "op": "processAll", "daysStay": 3 }
        ]"#;

        let responses = run_batch(&shared, parse(batch));

        assert_eq!(responses[0].data.as_ref().unwrap()["name"], "Rex");
        let drained = responses[2].data.as_ref().unwrap().as_array().unwrap().clone();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0]["status"], 200);
        assert_eq!(drained[0]["booking"]["days_stay"], 3);
        assert_eq!(drained[1]["code"], "NO_CAPACITY");
    }

    #[test]
    fn test_add_pet_rejects_unknown_species() {
        let shared = SharedEngine::default();
        let responses = run_batch(
            &shared,
            parse(r#"[{ "op": "addPet", "name": "Zip", "type": "ferret", "age": 1 }]"#),
        );
        assert_eq!(responses[0].status, 400);
        assert_eq!(shared.with_engine(|e| e.state().pets), 0);
    }

    #[test]
    fn test_bad_days_stay_is_validation_error() {
        let shared = SharedEngine::default();
        let responses = run_batch(&shared, parse(r#"[{ "op": "processAll", "daysStay": 0 }]"#));
        assert_eq!(responses[0].status, 400);
    }
}
