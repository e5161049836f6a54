//! JSON shapes of the `/convection/calculate` endpoint.
//!
//! A browser form posts every field as it was typed, so numeric fields may
//! arrive as JSON numbers or as strings, and untouched fields arrive blank.
//! [`respond`] turns a raw request body into a status code and a JSON reply,
//! leaving the transport to the caller:
//!
//! ```
//! use twine_conduction::models::thermal::transient::{TransientConduction, wire};
//!
//! let body = r#"{
//!     "thickness": "0.1", "conductivity_coefficient": "50",
//!     "convection_coefficient": 500, "initial_temperature": "300",
//!     "ambient_temperature": "25", "density": "7800", "specific_heat": "500",
//!     "distance": "0", "time": "300", "iterations": "", "geometry": "plate"
//! }"#;
//!
//! let reply = wire::respond(&TransientConduction::default(), body);
//! assert_eq!(reply.status, 200);
//! assert_eq!(reply.body["message"], "Success");
//! assert!(reply.body["data"]["calc3"]["value_theta"].is_number());
//! ```
//!
//! Units are SI throughout, except temperatures, which are in °C.

#![deny(missing_docs)]

use serde::{Deserialize, Serialize, Serializer, ser::SerializeMap};
use serde_json::{Value, json};
use twine_core::Model;
use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{
        DiffusionCoefficient, HeatTransfer, Length, MassDensity, SpecificHeatCapacity,
        ThermalConductivity, ThermodynamicTemperature, Time,
    },
    heat_transfer::watt_per_square_meter_kelvin,
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::degree_celsius,
    time::second,
};

use super::{
    CalculationError, CalculationRequest, CalculationResult, ErrorKind, Geometry, SeriesTerm,
    SolverConfig, TransientConduction,
};

/// A numeric form field: a JSON number or its text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum WireNumber {
    /// Sent as a JSON number.
    Number(f64),

    /// Sent as a string, possibly blank.
    Text(String),
}

/// Body of a calculation request.
///
/// Missing and `null` fields read as blank, and blank reads as zero.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct WireRequest {
    /// Plate thickness or cylinder/sphere radius, m. Blank is 0.
    pub thickness: Option<WireNumber>,
    /// Thermal diffusivity, m²/s. Blank or 0 derives it as `k/(ρc)`.
    pub thermal_diffusivity: Option<WireNumber>,
    /// Thermal conductivity `k`, W/(m·K). Blank is 0.
    pub conductivity_coefficient: Option<WireNumber>,
    /// Convection coefficient `h`, W/(m²·K). Blank is 0.
    pub convection_coefficient: Option<WireNumber>,
    /// Initial temperature, °C. Blank is 0.
    pub initial_temperature: Option<WireNumber>,
    /// Ambient temperature, °C. Blank is 0.
    pub ambient_temperature: Option<WireNumber>,
    /// Density `ρ`, kg/m³. Blank is 0.
    pub density: Option<WireNumber>,
    /// Specific heat `c`, J/(kg·K). Blank is 0.
    pub specific_heat: Option<WireNumber>,
    /// Distance from the center plane or axis, m. Blank is 0.
    pub distance: Option<WireNumber>,
    /// Elapsed time, s. Blank is 0.
    pub time: Option<WireNumber>,
    /// Number of series terms. Blank or 0 selects the configured default.
    pub iterations: Option<WireNumber>,
    /// Biot number override. Blank or 0 derives it as `h·L_c/k`.
    pub biot: Option<WireNumber>,
    /// `plate`, `cylinder` or `sphere`, case-insensitive.
    pub geometry: Option<String>,
}

impl WireRequest {
    /// Converts the form fields into a typed request.
    ///
    /// Zero `iterations` selects [`SolverConfig::default_terms`]; zero
    /// `biot` and zero `thermal_diffusivity` mean "not supplied". Every other
    /// zero is passed through and rejected later if it is not allowed.
    ///
    /// # Errors
    ///
    /// Returns [`CalculationError::InvalidGeometry`] for an unknown geometry
    /// and [`CalculationError::InvalidNumber`] for a field that is not a
    /// finite number, or an iteration count that is not a whole number.
    pub fn to_request(&self, config: &SolverConfig) -> Result<CalculationRequest, CalculationError> {
        let geometry: Geometry = self.geometry.as_deref().unwrap_or_default().parse()?;

        let thermal_diffusivity = number("thermal_diffusivity", self.thermal_diffusivity.as_ref())?;
        let biot = number("biot", self.biot.as_ref())?;

        Ok(CalculationRequest {
            geometry,
            thickness: Length::new::<meter>(number("thickness", self.thickness.as_ref())?),
            thermal_diffusivity: (thermal_diffusivity != 0.0).then(|| {
                DiffusionCoefficient::new::<square_meter_per_second>(thermal_diffusivity)
            }),
            conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(number(
                "conductivity_coefficient",
                self.conductivity_coefficient.as_ref(),
            )?),
            convection_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(number(
                "convection_coefficient",
                self.convection_coefficient.as_ref(),
            )?),
            initial_temperature: ThermodynamicTemperature::new::<degree_celsius>(number(
                "initial_temperature",
                self.initial_temperature.as_ref(),
            )?),
            ambient_temperature: ThermodynamicTemperature::new::<degree_celsius>(number(
                "ambient_temperature",
                self.ambient_temperature.as_ref(),
            )?),
            density: MassDensity::new::<kilogram_per_cubic_meter>(number(
                "density",
                self.density.as_ref(),
            )?),
            specific_heat: SpecificHeatCapacity::new::<joule_per_kilogram_kelvin>(number(
                "specific_heat",
                self.specific_heat.as_ref(),
            )?),
            distance: Length::new::<meter>(number("distance", self.distance.as_ref())?),
            time: Time::new::<second>(number("time", self.time.as_ref())?),
            terms: term_count(self.iterations.as_ref(), config)?,
            biot: (biot != 0.0).then_some(biot),
        })
    }
}

/// Reads a field, treating missing and blank values as zero.
fn number(field: &'static str, raw: Option<&WireNumber>) -> Result<f64, CalculationError> {
    let invalid = |value: String| CalculationError::InvalidNumber { field, value };

    let value = match raw {
        None => return Ok(0.0),
        Some(WireNumber::Number(value)) => *value,
        Some(WireNumber::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(0.0);
            }
            trimmed.parse::<f64>().map_err(|_| invalid(text.clone()))?
        }
    };

    if value.is_finite() {
        Ok(value)
    } else {
        Err(invalid(value.to_string()))
    }
}

fn term_count(raw: Option<&WireNumber>, config: &SolverConfig) -> Result<usize, CalculationError> {
    let value = number("iterations", raw)?;
    if value == 0.0 {
        return Ok(config.default_terms);
    }
    if value < 0.0 || value.fract() != 0.0 {
        return Err(CalculationError::InvalidNumber {
            field: "iterations",
            value: value.to_string(),
        });
    }
    // Saturates for absurd counts, which the term-count check then rejects.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Ok(value as usize)
}

/// Successful reply body.
#[derive(Debug, Clone, Serialize)]
pub struct WireResponse {
    /// Always `"Success"`.
    pub message: &'static str,

    /// Echoed inputs and computed values.
    pub data: WireData,
}

/// The `data` object of a successful reply.
///
/// Inputs are echoed with the Biot number and diffusivity actually used.
/// Per-term values appear as `calc1..calcN` and eigenvalues as
/// `lamb.lambda1..lambdaN`.
#[derive(Debug, Clone, Serialize)]
pub struct WireData {
    /// Echoed thickness or radius, m.
    pub thickness: f64,
    /// Diffusivity used for `Fo`, m²/s.
    pub thermal_diffusivity: f64,
    /// Echoed conductivity, W/(m·K).
    pub conductivity_coefficient: f64,
    /// Echoed convection coefficient, W/(m²·K).
    pub convection_coefficient: f64,
    /// Echoed initial temperature, °C.
    pub initial_temperature: f64,
    /// Echoed ambient temperature, °C.
    pub ambient_temperature: f64,
    /// Echoed density, kg/m³.
    pub density: f64,
    /// Echoed specific heat, J/(kg·K).
    pub specific_heat: f64,
    /// Echoed distance, m.
    pub distance: f64,
    /// Echoed time, s.
    pub time: f64,
    /// Number of series terms evaluated.
    pub iterations: usize,
    /// Biot number used.
    pub biot: f64,
    /// Fourier number `α·t/L_c²`.
    pub fourier: f64,
    /// Body shape.
    pub geometry: Geometry,

    /// Maximum transferable heat, in J/m², J/m or J by geometry.
    pub q_max: f64,

    /// Per-term values, flattened into `calc1..calcN`.
    #[serde(flatten)]
    pub calcs: TermBlocks,
    /// Eigenvalues `λ_1..λ_N`.
    pub lamb: LambdaBlock,

    /// `A_1`
    pub value_a: f64,
    /// Dimensionless center temperature `θ_o`.
    pub value_theta_o: f64,
    /// Dimensionless temperature `θ` at the requested position.
    pub value_theta: f64,

    /// Sum of the per-term heat contributions, `1 − Q/Q_max`.
    pub value_q: f64,

    /// Temperature at the requested position, °C.
    pub tem: f64,

    /// Heat transferred so far, in the unit of `q_max`.
    pub q: f64,
    /// Fraction `Q/Q_max` of the maximum heat already transferred.
    pub heat_ratio: f64,
    /// Advisories raised during the calculation. Empty when none.
    pub warnings: Vec<WireWarning>,
}

impl WireData {
    /// Assembles the reply data from a request and its result.
    #[must_use]
    pub fn new(request: &CalculationRequest, result: &CalculationResult) -> Self {
        Self {
            thickness: request.thickness.get::<meter>(),
            thermal_diffusivity: result.groups.diffusivity.get::<square_meter_per_second>(),
            conductivity_coefficient: request.conductivity.get::<watt_per_meter_kelvin>(),
            convection_coefficient: request
                .convection_coefficient
                .get::<watt_per_square_meter_kelvin>(),
            initial_temperature: request.initial_temperature.get::<degree_celsius>(),
            ambient_temperature: request.ambient_temperature.get::<degree_celsius>(),
            density: request.density.get::<kilogram_per_cubic_meter>(),
            specific_heat: request.specific_heat.get::<joule_per_kilogram_kelvin>(),
            distance: request.distance.get::<meter>(),
            time: request.time.get::<second>(),
            iterations: result.terms.len(),
            biot: result.groups.biot.value(),
            fourier: result.groups.fourier.value(),
            geometry: result.geometry,
            q_max: result.max_heat.si_value(),
            calcs: TermBlocks(result.terms.iter().map(WireTerm::from).collect()),
            lamb: LambdaBlock(result.eigenvalues.iter().map(|e| e.value).collect()),
            value_a: result.dominant_coefficient,
            value_theta_o: result.center_theta,
            value_theta: result.theta,
            value_q: result.heat_sum,
            tem: result.temperature.get::<degree_celsius>(),
            q: result.heat.si_value(),
            heat_ratio: *result.heat_ratio.as_ref(),
            warnings: result
                .advisories
                .iter()
                .map(|advisory| WireWarning {
                    code: advisory.code(),
                    message: advisory.to_string(),
                })
                .collect(),
        }
    }
}

/// One `calcN` object.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WireTerm {
    /// Coefficient `A_n`.
    pub value_a: f64,
    /// Center contribution `θ_o,n`.
    pub value_theta_o: f64,
    /// Contribution `θ_n` at the requested position.
    pub value_theta: f64,
    /// Heat contribution `q_n`, dimensionless.
    pub value_q: f64,
}

impl From<&SeriesTerm> for WireTerm {
    fn from(term: &SeriesTerm) -> Self {
        Self {
            value_a: term.coefficient,
            value_theta_o: term.center_theta,
            value_theta: term.theta,
            value_q: term.heat,
        }
    }
}

/// Per-term objects, serialized as sibling keys `calc1`, `calc2`, ….
#[derive(Debug, Clone, PartialEq)]
pub struct TermBlocks(pub Vec<WireTerm>);

impl Serialize for TermBlocks {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, term) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("calc{}", i + 1), term)?;
        }
        map.end()
    }
}

/// Eigenvalues, serialized as `{"lambda1": …, "lambda2": …}`.
#[derive(Debug, Clone, PartialEq)]
pub struct LambdaBlock(pub Vec<f64>);

impl Serialize for LambdaBlock {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (i, lambda) in self.0.iter().enumerate() {
            map.serialize_entry(&format!("lambda{}", i + 1), lambda)?;
        }
        map.end()
    }
}

/// An advisory as it appears in `warnings`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireWarning {
    /// Stable machine-readable code, e.g. `fourier_below_threshold`.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
}

/// Error reply body, `{"error": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireErrorBody {
    /// The error itself.
    pub error: WireErrorDetail,
}

/// Contents of an error reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WireErrorDetail {
    /// Stable machine-readable code, e.g. `non_positive_dimension`.
    pub code: &'static str,
    /// Whether the input or the numerics failed.
    pub kind: ErrorKind,
    /// Human-readable description.
    pub message: String,
}

impl From<&CalculationError> for WireErrorBody {
    fn from(err: &CalculationError) -> Self {
        Self {
            error: WireErrorDetail {
                code: err.code(),
                kind: err.kind(),
                message: err.to_string(),
            },
        }
    }
}

/// A status code and JSON body, ready for any HTTP stack.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    /// HTTP status code.
    pub status: u16,
    /// JSON reply body.
    pub body: Value,
}

impl Reply {
    fn new(status: u16, body: &impl Serialize) -> Self {
        match serde_json::to_value(body) {
            Ok(body) => Self { status, body },
            Err(err) => {
                log::error!("failed to serialize reply: {err}");
                Self {
                    status: 500,
                    body: json!({
                        "error": {
                            "code": "serialization",
                            "kind": ErrorKind::Numerical,
                            "message": err.to_string(),
                        }
                    }),
                }
            }
        }
    }

    fn error(err: &CalculationError) -> Self {
        Self::new(err.status(), &WireErrorBody::from(err))
    }
}

/// Handles one calculation request body.
///
/// Malformed JSON is answered with status 400 and code `malformed_request`.
/// Other failures carry the status and code of the [`CalculationError`].
#[must_use]
pub fn respond(model: &TransientConduction, body: &str) -> Reply {
    let wire: WireRequest = match serde_json::from_str(body) {
        Ok(wire) => wire,
        Err(err) => {
            log::debug!("malformed calculation request: {err}");
            return Reply::new(
                400,
                &WireErrorBody {
                    error: WireErrorDetail {
                        code: "malformed_request",
                        kind: ErrorKind::Input,
                        message: err.to_string(),
                    },
                },
            );
        }
    };

    let outcome = wire.to_request(model.config()).and_then(|request| {
        let result = model.call(&request)?;
        Ok(WireResponse {
            message: "Success",
            data: WireData::new(&request, &result),
        })
    });

    match outcome {
        Ok(response) => Reply::new(200, &response),
        Err(err) => {
            log::debug!("calculation rejected: {err}");
            Reply::error(&err)
        }
    }
}
