
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use lib::service::common_structs::{AnalyzeResponse, JournalInput, Sentiment, FALLBACK_FEEDBACK};
use lib::service::CommonService;
use serde_json::{json, Value};
use tracing::{error, info, warn};
use uuid::Uuid;


fn build_error_response(status: StatusCode, message: &str) -> Response {
    let body = json!({
        "success": false,
        "message": message
    });
    (status, Json(body)).into_response()
}

fn build_success_response(body: Value) -> Response {
    Json(body).into_response()
}


pub async fn analyze_and_feedback(
    State(service): State<CommonService>,
    Json(input): Json<JournalInput>,
) -> Response {
    let request_id = Uuid::new_v4();

    if input.content.trim().is_empty() {
        return build_error_response(StatusCode::BAD_REQUEST, "Content is required");
    }

    let prediction = match service.classifier.classify(&input.content).await {
        Ok(prediction) => prediction,
        Err(error) => {
            error!("[{}] error classifying entry: {:?}", request_id, error);
            return build_error_response(StatusCode::INTERNAL_SERVER_ERROR, "Emotion analysis failed");
        },
    };

    let sentiment = Sentiment::from_emotion(&prediction.label);
    info!("[{}] analysis complete: {} ({})", request_id, prediction.label, sentiment);

    // The chat model failing must never fail the request.
    let feedback_text = match service.chat.generate_feedback(&input.content, &prediction.label).await {
        Ok(text) => text,
        Err(error) => {
            warn!("[{}] error generating feedback: {:?}", request_id, error);
            FALLBACK_FEEDBACK.to_owned()
        },
    };

    let response = AnalyzeResponse::new(&prediction, sentiment, feedback_text);
    build_success_response(json!(response))
}


#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use lib::service::chat_service::ChatService;
    use lib::service::classifier_service::ClassifierService;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_against(classifier: &MockServer, chat: &MockServer) -> CommonService {
        CommonService {
            classifier: ClassifierService::with_endpoint(&classifier.uri(), "test/emotion", None),
            chat: ChatService::with_host(&chat.uri(), "phi3:mini"),
        }
    }

    async fn mock_classifier(server: &MockServer, label: &str, score: f64) {
        Mock::given(method("POST"))
            .and(path("/models/test/emotion"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                { "label": label, "score": score }
            ])))
            .mount(server)
            .await;
    }

    async fn mock_chat(server: &MockServer, reply: &str) {
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": { "role": "assistant", "content": reply }
            })))
            .mount(server)
            .await;
    }

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    fn input(content: &str) -> Json<JournalInput> {
        Json(JournalInput {
            content: content.to_owned(),
            mood_rating: None,
        })
    }

    #[tokio::test]
    async fn empty_content_is_rejected() {
        let service = CommonService {
            classifier: ClassifierService::with_endpoint("http://127.0.0.1:1", "test/emotion", None),
            chat: ChatService::with_host("http://127.0.0.1:1", "phi3:mini"),
        };

        let response = analyze_and_feedback(State(service), input("   ")).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Content is required");
    }

    #[tokio::test]
    async fn combines_classification_and_feedback() {
        let classifier = MockServer::start().await;
        let chat = MockServer::start().await;
        mock_classifier(&classifier, "Sadness", 0.93).await;
        mock_chat(&chat, "That sounds heavy. Be gentle with yourself.").await;

        let service = service_against(&classifier, &chat);
        let response = analyze_and_feedback(State(service), input("Everything feels heavy lately.")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["emotion"], "sadness");
        assert_eq!(body["sentiment"], "negative");
        assert_eq!(body["feedbackText"], "That sounds heavy. Be gentle with yourself.");
        assert_eq!(body["feedbackType"], "Emotion: sadness");
        assert_eq!(body["ruleTriggered"], "Sentiment: negative");
    }

    #[tokio::test]
    async fn chat_failure_falls_back_to_canned_feedback() {
        let classifier = MockServer::start().await;
        let chat = MockServer::start().await;
        mock_classifier(&classifier, "joy", 0.88).await;
        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&chat)
            .await;

        let service = service_against(&classifier, &chat);
        let response = analyze_and_feedback(State(service), input("We laughed for hours.")).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["emotion"], "joy");
        assert_eq!(body["sentiment"], "positive");
        assert_eq!(body["feedbackText"], FALLBACK_FEEDBACK);
    }

    #[tokio::test]
    async fn classifier_failure_is_a_server_error() {
        let classifier = MockServer::start().await;
        let chat = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/test/emotion"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&classifier)
            .await;

        let service = service_against(&classifier, &chat);
        let response = analyze_and_feedback(State(service), input("anything at all")).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "Emotion analysis failed");
    }
}
