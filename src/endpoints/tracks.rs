//! Endpoint functions related to tracks

use log::{debug, warn};

use crate::client::*;
use crate::model::audio_features::{AudioFeatures, MusicalData};
use crate::model::search::SearchQuery;
use crate::model::track::*;
use crate::model::ResourceType;

pub struct Tracks<'a>(pub &'a Spotify);

impl Tracks<'_> {
    /// Track metadata merged with its key and tempo.
    ///
    /// Fails when the audio features can't be read. `None` when the track
    /// itself is missing any of the merged fields.
    pub async fn get(&self, id: &str) -> ClientResult<Option<Track>> {
        let track_data = self.0.get_resource(id, ResourceType::Tracks, DEFAULT_API_VERSION).await?;
        let musical_data = self.musical_data(id).await?;

        let track = match Spotify::convert_value::<TrackObject>(track_data) {
            Ok(track_object) => Track::merge(&track_object, musical_data),
            Err(err) => {
                debug!("track {} could not be parsed: {}", id, err);
                None
            }
        };

        if track.is_none() {
            warn!("no track data found for {}", id);
        }
        Ok(track)
    }

    /// Searches tracks only and flattens every result.
    ///
    /// A response that doesn't look like a track search gives an empty list.
    pub async fn search(&self, query: &SearchQuery) -> ClientResult<Vec<TrackSummary>> {
        let json_data = self.0.search(query, "track", DEFAULT_MARKET).await?;

        let tracks = Spotify::convert_value::<TrackSearch>(json_data).ok().and_then(|search| {
            search
                .tracks
                .items
                .iter()
                .map(TrackSummary::from_object)
                .collect::<Option<Vec<TrackSummary>>>()
        });

        match tracks {
            Some(tracks) => Ok(tracks),
            None => {
                warn!("invalid search, no data found");
                Ok(Vec::new())
            }
        }
    }

    /// Key and tempo of a track, from its audio features.
    pub async fn musical_data(&self, id: &str) -> ClientResult<MusicalData> {
        let features = self.0.audio_features().get(id).await?;
        let features = Spotify::convert_value::<AudioFeatures>(features)
            .map_err(|_| ClientError::NoData(id.to_owned()))?;
        MusicalData::from_features(id, &features).ok_or_else(|| ClientError::NoData(id.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::{
        client, mock_request_failure, mock_request_success, mock_request_success_from_file,
    };
    use mockito::{mock, Matcher};

    #[tokio::test]
    async fn get() {
        let _track = mock_request_success_from_file("GET", "/v1/tracks/mock_track_id", "tests/files/track.json");
        let _features = mock_request_success_from_file(
            "GET",
            "/v1/audio-features/mock_track_id",
            "tests/files/audio_features.json",
        );

        let result = client().await.tracks().get("mock_track_id").await.unwrap();
        let expected_result = Track {
            track_id: "mock_track_id".to_owned(),
            track_name: "mock_name".to_owned(),
            artist: "mock_artist".to_owned(),
            track_url: "mock_track_url".to_owned(),
            image_url: "mock_image_url".to_owned(),
            key: "E Major".to_owned(),
            tempo: 120,
        };
        assert_eq!(result, Some(expected_result));
    }

    #[tokio::test]
    async fn get_track_not_found() {
        let _track = mock_request_failure("GET", "/v1/tracks/mock_track_id");
        let _features = mock_request_success_from_file(
            "GET",
            "/v1/audio-features/mock_track_id",
            "tests/files/audio_features.json",
        );

        let result = client().await.tracks().get("mock_track_id").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn get_track_without_images() {
        let _track = mock_request_success(
            "GET",
            "/v1/tracks/mock_track_id",
            r#"{"name": "mock_name", "artists": [{"name": "mock_artist"}],
                "external_urls": {"spotify": "mock_track_url"}, "album": {"images": []}}"#,
        );
        let _features = mock_request_success_from_file(
            "GET",
            "/v1/audio-features/mock_track_id",
            "tests/files/audio_features.json",
        );

        let result = client().await.tracks().get("mock_track_id").await.unwrap();
        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn get_invalid_id() {
        let _track = mock_request_failure("GET", "/v1/tracks/");
        let _features = mock_request_failure("GET", "/v1/audio-features/");

        let result = client().await.tracks().get("").await;
        assert!(matches!(result, Err(ClientError::NoData(_))));
    }

    #[tokio::test]
    async fn search() {
        let _mock = mock("GET", "/v1/search")
            .match_query(Matcher::AllOf(vec![
                Matcher::UrlEncoded("q".into(), "track:money ".into()),
                Matcher::UrlEncoded("type".into(), "track".into()),
                Matcher::UrlEncoded("market".into(), "GB".into()),
            ]))
            .with_status(200)
            .with_body_from_file("tests/files/search_tracks.json")
            .create();

        let query = SearchQuery::new().track("money");
        let result: Vec<TrackSummary> = client().await.tracks().search(&query).await.unwrap();
        let expected_result = vec![TrackSummary {
            track_id: "mock_id".to_owned(),
            track_name: "mock_name".to_owned(),
            artist: "mock_artist".to_owned(),
            track_url: "mock_track_url".to_owned(),
            image_url: "mock_image_url".to_owned(),
        }];
        assert_eq!(result, expected_result);
    }

    #[tokio::test]
    async fn search_unexpected_shape() {
        let _mock = mock("GET", "/v1/search")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"artists": {"items": []}}"#)
            .create();

        let query = SearchQuery::new().track("money").artist("pink floyd");
        let result = client().await.tracks().search(&query).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn search_failure() {
        let _mock = mock("GET", "/v1/search")
            .match_query(Matcher::Any)
            .with_status(503)
            .create();

        let query = SearchQuery::new().track("money");
        let result = client().await.tracks().search(&query).await.unwrap();
        assert!(result.is_empty());
    }

    #[tokio::test]
    async fn search_missing_query() {
        let result = client().await.tracks().search(&SearchQuery::new()).await;
        assert!(matches!(result, Err(ClientError::MissingQuery)));
    }

    #[tokio::test]
    async fn musical_data() {
        let _mock = mock_request_success(
            "GET",
            "/v1/audio-features/mock_track_id",
            r#"{"mock_json_data": "mock_json_data", "key": 4, "mode": 1, "tempo": "120"}"#,
        );

        let result = client().await.tracks().musical_data("mock_track_id").await.unwrap();
        let expected_result = MusicalData {
            track_id: "mock_track_id".to_owned(),
            key: "E Major".to_owned(),
            tempo: 120,
        };
        assert_eq!(result, expected_result);
    }

    #[tokio::test]
    async fn musical_data_float_tempo_without_key() {
        let _mock = mock_request_success(
            "GET",
            "/v1/audio-features/mock_track_id",
            r#"{"key": -1, "mode": 0, "tempo": 97.86}"#,
        );

        let result = client().await.tracks().musical_data("mock_track_id").await.unwrap();
        assert_eq!(result.key, "No Key Available");
        assert_eq!(result.tempo, 97);
    }

    #[tokio::test]
    async fn musical_data_without_mode() {
        let _mock = mock_request_success(
            "GET",
            "/v1/audio-features/mock_track_id",
            r#"{"key": 4, "mode": null, "tempo": 120.0}"#,
        );

        let result = client().await.tracks().musical_data("mock_track_id").await.unwrap();
        assert_eq!(result.key, "E");
        assert_eq!(result.tempo, 120);
    }

    #[tokio::test]
    async fn musical_data_not_found() {
        let _mock = mock_request_failure("GET", "/v1/audio-features/");

        let result = client().await.tracks().musical_data("").await;
        assert!(matches!(result, Err(ClientError::NoData(_))));
    }
}
