use crate::e2e::helpers;

use base64::Engine;
use helpers::tts_stubs::{mock_audio_bytes, StubTtsRepository};
use helpers::TestContext;
use hyper::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_context::test_context;
use voiceover_backend::domain::voice::StylePolicy;

const ENDPOINTS: [&str; 2] = ["/voice/generate", "/voice/preview"];

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_download_generated_audio_as_mp3(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/voice/generate",
            &json!({
                "text": "Hello",
                "languageCode": "en-IN",
                "voiceStyle": "standard",
                "gender": "male"
            }),
        )
        .await
        .unwrap();

    response
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg")
        .assert_header("content-disposition", "attachment; filename=\"voiceover.mp3\"")
        .assert_header("x-voice-used", "en-IN-Standard-B")
        .assert_header("x-character-count", "5");

    assert_eq!(response.body_bytes, mock_audio_bytes());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_return_base64_audio_for_preview(ctx: &TestContext) {
    let response = ctx
        .client
        .post(
            "/voice/preview",
            &json!({
                "text": "Namaste",
                "languageCode": "hi-IN",
                "voiceStyle": "premium",
                "gender": "female"
            }),
        )
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let body = response.body.as_ref().expect("Preview should return JSON");
    assert_eq!(body.get("success").and_then(|v| v.as_bool()), Some(true));

    let audio = body.get("audio").and_then(|v| v.as_str()).unwrap();
    assert!(!audio.is_empty());
    let decoded = base64::engine::general_purpose::STANDARD
        .decode(audio)
        .unwrap();
    assert_eq!(decoded, mock_audio_bytes());

    let calls = ctx.tts.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].voice.name, "hi-IN-Wavenet-D");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_apply_defaults_for_missing_fields(ctx: &TestContext) {
    let response = ctx
        .client
        .post("/voice/preview", &json!({ "text": "Hello" }))
        .await
        .unwrap();

    response.assert_status(StatusCode::OK);

    let calls = ctx.tts.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].voice.language_code, "en-IN");
    assert_eq!(calls[0].voice.name, "en-IN-Standard-B");
    assert_eq!(calls[0].speaking_rate, 1.0);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_legacy_voice_type_field(ctx: &TestContext) {
    ctx.client
        .post(
            "/voice/generate",
            &json!({ "text": "Hello", "voiceType": "wavenet", "gender": "female" }),
        )
        .await
        .unwrap()
        .assert_status(StatusCode::OK)
        .assert_header("x-voice-used", "en-IN-Wavenet-A");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_standard_voice_for_gujarati(ctx: &TestContext) {
    ctx.client
        .post(
            "/voice/generate",
            &json!({ "text": "Kem cho", "languageCode": "gu-IN", "voiceStyle": "premium" }),
        )
        .await
        .unwrap()
        .assert_header("x-voice-used", "gu-IN-Standard-B");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_fall_back_to_default_language_for_unknown_codes(ctx: &TestContext) {
    ctx.client
        .post(
            "/voice/generate",
            &json!({ "text": "Hello", "languageCode": "xx-XX", "voiceStyle": "premium" }),
        )
        .await
        .unwrap()
        .assert_header("x-voice-used", "en-IN-Wavenet-B");

    assert_eq!(ctx.tts.calls()[0].voice.language_code, "en-IN");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_upgrade_unrecognized_style_by_default(ctx: &TestContext) {
    ctx.client
        .post(
            "/voice/generate",
            &json!({ "text": "Hello", "voiceStyle": "studio" }),
        )
        .await
        .unwrap()
        .assert_header("x-voice-used", "en-IN-Wavenet-B");
}

#[tokio::test]
async fn it_should_reject_unrecognized_style_when_configured() {
    let ctx = TestContext::with_stub(StubTtsRepository::succeeding(), StylePolicy::Reject).await;

    for endpoint in ENDPOINTS {
        ctx.client
            .post(endpoint, &json!({ "text": "Hello", "voiceStyle": "studio" }))
            .await
            .unwrap()
            .assert_failure("Unsupported voice style 'studio'");
    }

    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_empty_text(ctx: &TestContext) {
    for endpoint in ENDPOINTS {
        for body in [json!({}), json!({ "text": "" }), json!({ "text": "   \n\t" })] {
            ctx.client
                .post(endpoint, &body)
                .await
                .unwrap()
                .assert_failure("Please enter some text to convert.");
        }
    }

    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_text_over_5000_characters(ctx: &TestContext) {
    for endpoint in ENDPOINTS {
        ctx.client
            .post(endpoint, &json!({ "text": "a".repeat(5001) }))
            .await
            .unwrap()
            .assert_failure("Text exceeds maximum length of 5000 characters.");
    }

    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_text_of_exactly_5000_characters(ctx: &TestContext) {
    ctx.client
        .post("/voice/generate", &json!({ "text": "a".repeat(5000) }))
        .await
        .unwrap()
        .assert_status(StatusCode::OK)
        .assert_header("content-type", "audio/mpeg");
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_reject_speaking_rate_out_of_range(ctx: &TestContext) {
    for endpoint in ENDPOINTS {
        for rate in [0.49, 2.01, 0.0, 5.0] {
            ctx.client
                .post(endpoint, &json!({ "text": "Hello", "speakingRate": rate }))
                .await
                .unwrap()
                .assert_failure("Speaking rate must be between 0.5 and 2.0.");
        }
    }

    assert!(ctx.tts.calls().is_empty());
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_accept_speaking_rate_boundaries(ctx: &TestContext) {
    for rate in [0.5, 2.0] {
        ctx.client
            .post("/voice/generate", &json!({ "text": "Hello", "speakingRate": rate }))
            .await
            .unwrap()
            .assert_status(StatusCode::OK)
            .assert_header("content-type", "audio/mpeg");
    }

    let rates: Vec<f32> = ctx.tts.calls().iter().map(|c| c.speaking_rate).collect();
    assert_eq!(rates, vec![0.5, 2.0]);
}

#[test_context(TestContext)]
#[tokio::test]
async fn it_should_wrap_malformed_bodies_in_error_envelope(ctx: &TestContext) {
    for endpoint in ENDPOINTS {
        ctx.client
            .post_raw(endpoint, "{not json", Some("application/json"))
            .await
            .unwrap()
            .assert_failure("Invalid request body");

        ctx.client
            .post_raw(endpoint, "text=Hello", Some("application/x-www-form-urlencoded"))
            .await
            .unwrap()
            .assert_failure("Invalid request body");
    }

    assert!(ctx.tts.calls().is_empty());
}

#[tokio::test]
async fn it_should_report_provider_failure_on_both_endpoints() {
    let ctx = TestContext::with_stub(StubTtsRepository::failing(), StylePolicy::default()).await;

    for endpoint in ENDPOINTS {
        let response = ctx
            .client
            .post(endpoint, &json!({ "text": "Hello" }))
            .await
            .unwrap();

        response.assert_failure(
            "Failed to generate voice. Please check your Google Cloud credentials and API key.",
        );
        assert!(response.header("content-disposition").is_none());
    }

    assert_eq!(ctx.tts.calls().len(), 2);
}
