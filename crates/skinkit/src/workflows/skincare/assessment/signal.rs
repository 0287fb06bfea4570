use serde_json::Value;

use super::domain::RawSignal;

/// Boundary validation failures for provider signals.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SignalError {
    #[error("beauty score must be a finite number between 0 and 100 (found {0})")]
    BeautyScoreOutOfRange(f64),
    #[error("face-analysis response contained no faces")]
    NoFaceDetected,
    #[error("face-analysis response is missing `{0}`")]
    MissingAttribute(&'static str),
    #[error("face-analysis age {0} is not a whole number of years")]
    InvalidAge(f64),
}

impl RawSignal {
    /// Reject scores outside the provider's documented range. `derive` does not call this.
    pub fn validate(&self) -> Result<(), SignalError> {
        if self.beauty_score.is_finite() && (0.0..=100.0).contains(&self.beauty_score) {
            Ok(())
        } else {
            Err(SignalError::BeautyScoreOutOfRange(self.beauty_score))
        }
    }

    /// Parse the first face of a provider payload shaped like
    /// `{"faces": [{"attributes": {"beauty": {...}, "age": {"value": 31}, "gender": {...}}}]}`.
    ///
    /// The beauty score matching the detected gender is used; without a gender, or when the
    /// matching score is absent, the mean of the available scores is taken.
    pub fn from_face_response(response: &Value) -> Result<Self, SignalError> {
        let face = response
            .get("faces")
            .and_then(Value::as_array)
            .and_then(|faces| faces.first())
            .ok_or(SignalError::NoFaceDetected)?;

        let attributes = face
            .get("attributes")
            .ok_or(SignalError::MissingAttribute("attributes"))?;

        let age = attributes
            .get("age")
            .and_then(|age| age.get("value"))
            .and_then(Value::as_f64)
            .ok_or(SignalError::MissingAttribute("attributes.age.value"))?;
        if !age.is_finite() || age < 0.0 || age.fract() != 0.0 || age > u32::MAX as f64 {
            return Err(SignalError::InvalidAge(age));
        }

        let beauty = attributes
            .get("beauty")
            .ok_or(SignalError::MissingAttribute("attributes.beauty"))?;
        let male = beauty.get("male_score").and_then(Value::as_f64);
        let female = beauty.get("female_score").and_then(Value::as_f64);
        let gender = attributes
            .get("gender")
            .and_then(|gender| gender.get("value"))
            .and_then(Value::as_str)
            .map(str::to_ascii_lowercase);

        let matched = match gender.as_deref() {
            Some("male") => male,
            Some("female") => female,
            _ => None,
        };

        let beauty_score = match (matched, male, female) {
            (Some(score), _, _) => score,
            (None, Some(male), Some(female)) => (male + female) / 2.0,
            (None, Some(score), None) | (None, None, Some(score)) => score,
            (None, None, None) => {
                return Err(SignalError::MissingAttribute("attributes.beauty.*_score"))
            }
        };

        Ok(Self::new(beauty_score, age as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn face(attributes: Value) -> Value {
        json!({ "faces": [{ "face_token": "f-1", "attributes": attributes }] })
    }

    #[test]
    fn validate_rejects_out_of_range_scores() {
        assert!(RawSignal::new(0.0, 30).validate().is_ok());
        assert!(RawSignal::new(100.0, 30).validate().is_ok());
        assert_eq!(
            RawSignal::new(100.5, 30).validate(),
            Err(SignalError::BeautyScoreOutOfRange(100.5))
        );
        assert!(RawSignal::new(f64::NAN, 30).validate().is_err());
    }

    #[test]
    fn picks_score_for_detected_gender() {
        let response = face(json!({
            "age": { "value": 29 },
            "gender": { "value": "Female" },
            "beauty": { "male_score": 61.2, "female_score": 72.5 }
        }));

        let signal = RawSignal::from_face_response(&response).expect("signal parses");
        assert_eq!(signal, RawSignal::new(72.5, 29));
    }

    #[test]
    fn averages_scores_without_gender() {
        let response = face(json!({
            "age": { "value": 41 },
            "beauty": { "male_score": 60.0, "female_score": 70.0 }
        }));

        let signal = RawSignal::from_face_response(&response).expect("signal parses");
        assert_eq!(signal, RawSignal::new(65.0, 41));
    }

    #[test]
    fn reports_missing_faces_and_attributes() {
        assert_eq!(
            RawSignal::from_face_response(&json!({ "faces": [] })),
            Err(SignalError::NoFaceDetected)
        );
        assert_eq!(
            RawSignal::from_face_response(&face(json!({ "beauty": { "male_score": 50.0 } }))),
            Err(SignalError::MissingAttribute("attributes.age.value"))
        );
        assert_eq!(
            RawSignal::from_face_response(&face(json!({ "age": { "value": 33 }, "beauty": {} }))),
            Err(SignalError::MissingAttribute("attributes.beauty.*_score"))
        );
    }

    #[test]
    fn rejects_fractional_ages() {
        let response = face(json!({
            "age": { "value": 30.5 },
            "beauty": { "male_score": 60.0 }
        }));
        assert_eq!(
            RawSignal::from_face_response(&response),
            Err(SignalError::InvalidAge(30.5))
        );
    }
}
