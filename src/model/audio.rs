//! Audio features and audio analysis of a track.
//!
//! None of these carry their own identity beyond the features' `id`; an
//! analysis is looked up by the id of the track it was requested for.

// Use 3rd party
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioFeatures {
    /// Confidence from 0.0 to 1.0 that the track is acoustic.
    pub acousticness: f64,
    pub analysis_url: String,
    /// 0.0 is least danceable, 1.0 most danceable.
    pub danceability: f64,
    pub duration_ms: u64,
    /// Perceptual intensity from 0.0 to 1.0.
    pub energy: f64,
    pub id: String,
    pub instrumentalness: f64,
    /// Pitch class, -1 when no key was detected.
    pub key: i32,
    pub liveness: f64,
    /// Overall loudness in dB.
    pub loudness: f64,
    /// 1 is major, 0 is minor.
    pub mode: i32,
    pub speechiness: f64,
    /// Beats per minute.
    pub tempo: f64,
    pub time_signature: i32,
    pub track_href: String,
    /// Always "audio_features".
    #[serde(rename = "type")]
    pub _type: String,
    pub uri: String,
    /// Musical positiveness from 0.0 to 1.0.
    pub valence: f64,
}

/// Body of the several-audio-features endpoint, `None` for unknown ids.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioFeaturesList {
    pub audio_features: Vec<Option<AudioFeatures>>,
}

/// A bar, beat or tatum.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: f64,
    pub duration: f64,
    pub confidence: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSection {
    pub start: f64,
    pub duration: f64,
    pub confidence: f64,
    pub loudness: f64,
    pub tempo: f64,
    pub tempo_confidence: f64,
    pub key: i32,
    pub key_confidence: f64,
    pub mode: i32,
    pub mode_confidence: f64,
    pub time_signature: i32,
    pub time_signature_confidence: f64,
}

impl AudioSection {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval {
            start: self.start,
            duration: self.duration,
            confidence: self.confidence,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioSegment {
    pub start: f64,
    pub duration: f64,
    pub confidence: f64,
    pub loudness_start: f64,
    pub loudness_max: f64,
    pub loudness_max_time: f64,
    #[serde(default)]
    pub loudness_end: f64,
    /// Twelve values, one per pitch class.
    pub pitches: Vec<f64>,
    /// Twelve timbre coefficients.
    pub timbre: Vec<f64>,
}

impl AudioSegment {
    pub fn interval(&self) -> TimeInterval {
        TimeInterval {
            start: self.start,
            duration: self.duration,
            confidence: self.confidence,
        }
    }
}

/// Track level summary of an analysis.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioTrack {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub num_samples: Option<u64>,
    pub duration: f64,
    pub sample_md5: String,
    pub offset_seconds: u32,
    pub window_seconds: u32,
    pub analysis_sample_rate: u32,
    pub analysis_channels: u32,
    pub end_of_fade_in: f64,
    pub start_of_fade_out: f64,
    pub loudness: f64,
    pub tempo: f64,
    pub tempo_confidence: f64,
    pub time_signature: i32,
    pub time_signature_confidence: f64,
    pub key: i32,
    pub key_confidence: f64,
    pub mode: i32,
    pub mode_confidence: f64,
    pub codestring: String,
    pub code_version: f64,
    pub echoprintstring: String,
    pub echoprint_version: f64,
    pub synchstring: String,
    pub synch_version: f64,
    pub rhythmstring: String,
    pub rhythm_version: f64,
}

/// Information about the analyzer run.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysisMeta {
    pub analyzer_version: String,
    pub platform: String,
    pub detailed_status: String,
    pub status_code: i32,
    /// Unix timestamp in seconds of the run.
    pub timestamp: u64,
    /// Seconds the analysis took.
    pub analysis_time: f64,
    pub input_process: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AudioAnalysis {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<AudioAnalysisMeta>,
    pub track: AudioTrack,
    pub bars: Vec<TimeInterval>,
    pub beats: Vec<TimeInterval>,
    pub tatums: Vec<TimeInterval>,
    pub sections: Vec<AudioSection>,
    pub segments: Vec<AudioSegment>,
}
