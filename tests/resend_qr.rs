mod common;

mod resend_qr {
    mod search {
        use crate::common::*;
        use regdesk::app::features::{
            email_editor::EditorMode,
            resend_qr::{FlowError, ResendStep, NOT_FOUND_MESSAGE},
        };
        use std::sync::Arc;

        #[tokio::test]
        async fn blank_identity_is_required() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();

            let err = flow.search(&registry).await.unwrap_err();

            assert_eq!(err.to_string(), "La cédula es requerida");
            assert_eq!(flow.identity_error(), Some(&err));
            assert_eq!(flow.step(), ResendStep::Search);
        }

        #[tokio::test]
        async fn short_identity_is_invalid() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input("12345");

            let err = flow.search(&registry).await.unwrap_err();

            assert_eq!(err.to_string(), "La cédula debe tener 10 dígitos");
        }

        #[tokio::test]
        async fn typing_clears_previous_error() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            let _ = flow.search(&registry).await;
            assert!(flow.identity_error().is_some());

            flow.set_identity_input("1");

            assert!(flow.identity_error().is_none());
        }

        #[tokio::test]
        async fn unknown_identity_reports_not_found() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input("0999999999");

            let err = flow.search(&registry).await.unwrap_err();

            assert_eq!(err, FlowError::NotFound);
            assert_eq!(err.to_string(), NOT_FOUND_MESSAGE);
        }

        #[tokio::test]
        async fn registry_failure_reads_as_not_found() {
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);

            let err = flow.search(&UnavailableRegistry).await.unwrap_err();

            assert_eq!(err, FlowError::NotFound);
        }

        #[tokio::test]
        async fn hit_with_known_domain_loads_preset_editor() {
            let (registry, id) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input("171-234-5678");

            flow.search(&registry).await.unwrap();

            assert_eq!(flow.step(), ResendStep::Edit);
            assert_eq!(flow.found().unwrap().id, id);
            assert_eq!(flow.editor().mode(), EditorMode::Preset);
            assert_eq!(flow.email_parts().local_part(), "carla");
            assert_eq!(flow.email_parts().domain_part(), "@gmail.com");
        }

        #[tokio::test]
        async fn hit_with_other_domain_loads_custom_editor() {
            let (registry, _) = seeded_registry("carla@espe.edu.ec", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);

            flow.search(&registry).await.unwrap();

            assert_eq!(flow.editor().mode(), EditorMode::Custom);
            assert_eq!(flow.editor().input_value(flow.email_parts()), "carla@espe.edu.ec");
        }

        #[tokio::test]
        async fn search_is_refused_outside_search_step() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            let err = flow.search(&registry).await.unwrap_err();

            assert_eq!(err, FlowError::WrongStep(ResendStep::Edit));
        }
    }

    mod resend {
        use crate::common::*;
        use regdesk::app::features::{
            email_editor::EditorEvent,
            resend_qr::{FlowError, ResendStep, COOLDOWN_MESSAGE, RESEND_FAILED_MESSAGE},
        };
        use regdesk::app::registry::RegistrationService;
        use std::sync::Arc;
        use std::time::Duration;

        #[tokio::test]
        async fn unchanged_email_resends_without_update() {
            let mailer = Arc::new(RecordingMailer::default());
            let (registry, id) = seeded_registry("carla@gmail.com", mailer.clone());
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            flow.resend(&registry).await.unwrap();

            assert_eq!(flow.step(), ResendStep::Success);
            assert_eq!(flow.sent_to().unwrap().as_str(), "carla@gmail.com");
            assert_eq!(mailer.recipients(), ["carla@gmail.com"]);
            assert_eq!(registry.get(id).await.unwrap().email, "carla@gmail.com");
        }

        #[tokio::test]
        async fn switched_domain_updates_then_resends() {
            let mailer = Arc::new(RecordingMailer::default());
            let (registry, id) = seeded_registry("carla@gmail.com", mailer.clone());
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            flow.select_domain("@outlook.com").unwrap();
            flow.resend(&registry).await.unwrap();

            assert_eq!(registry.get(id).await.unwrap().email, "carla@outlook.com");
            assert_eq!(mailer.recipients(), ["carla@outlook.com"]);
            let sent = mailer.sent.lock().unwrap();
            assert_eq!(sent[0].from, FROM);
            assert!(sent[0].body.contains("Carla Andrade"));
        }

        #[tokio::test]
        async fn custom_email_is_split_and_saved() {
            let mailer = Arc::new(RecordingMailer::default());
            let (registry, id) = seeded_registry("carla@gmail.com", mailer.clone());
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            flow.select_domain("custom").unwrap();
            flow.edit_email(EditorEvent::Input("c.andrade@espe.edu.ec".into())).unwrap();
            flow.resend(&registry).await.unwrap();

            assert_eq!(registry.get(id).await.unwrap().email, "c.andrade@espe.edu.ec");
            assert_eq!(flow.sent_to().unwrap().as_str(), "c.andrade@espe.edu.ec");
        }

        #[tokio::test]
        async fn half_typed_email_is_rejected_and_nothing_sent() {
            let mailer = Arc::new(RecordingMailer::default());
            let (registry, id) = seeded_registry("carla@gmail.com", mailer.clone());
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            flow.select_domain("custom").unwrap();
            flow.edit_email(EditorEvent::Input("carla@".into())).unwrap();
            let err = flow.resend(&registry).await.unwrap_err();

            assert_eq!(err.to_string(), "El correo electrónico no es válido");
            assert_eq!(flow.step(), ResendStep::Edit);
            assert!(mailer.recipients().is_empty());
            assert_eq!(registry.get(id).await.unwrap().email, "carla@gmail.com");
        }

        #[tokio::test]
        async fn emptied_email_is_required() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            flow.select_domain("custom").unwrap();
            flow.edit_email(EditorEvent::Input(String::new())).unwrap();
            let err = flow.resend(&registry).await.unwrap_err();

            assert_eq!(err.to_string(), "El correo electrónico es requerido");
        }

        #[tokio::test]
        async fn editing_clears_email_error() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();
            flow.edit_email(EditorEvent::Input(String::new())).unwrap();
            let _ = flow.resend(&registry).await;
            assert!(flow.email_error().is_some());

            flow.edit_email(EditorEvent::Input("carla".into())).unwrap();

            assert!(flow.email_error().is_none());
        }

        #[tokio::test]
        async fn mail_failure_keeps_edit_step() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(BrokenMailer));
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();

            let err = flow.resend(&registry).await.unwrap_err();

            assert_eq!(err, FlowError::ResendFailed);
            assert_eq!(err.to_string(), RESEND_FAILED_MESSAGE);
            assert_eq!(flow.step(), ResendStep::Edit);
            assert!(flow.sent_to().is_none());
        }

        #[tokio::test]
        async fn cooldown_blocks_quick_repeat() {
            let mailer = Arc::new(RecordingMailer::default());
            let (registry, _) = seeded_registry("carla@gmail.com", mailer.clone());
            let mut first = flow_with_cooldown(Duration::from_secs(60));
            let mut second = first.clone();
            for flow in [&mut first, &mut second] {
                flow.set_identity_input(IDENTITY);
                flow.search(&registry).await.unwrap();
            }

            first.resend(&registry).await.unwrap();
            let err = second.resend(&registry).await.unwrap_err();

            assert_eq!(err.to_string(), COOLDOWN_MESSAGE);
            assert_eq!(mailer.recipients().len(), 1);
        }

        #[tokio::test]
        async fn failed_send_does_not_burn_cooldown() {
            let (broken, _) = seeded_registry("carla@gmail.com", Arc::new(BrokenMailer));
            let mut flow = flow_with_cooldown(Duration::from_secs(60));
            flow.set_identity_input(IDENTITY);
            flow.search(&broken).await.unwrap();
            assert_eq!(flow.resend(&broken).await.unwrap_err(), FlowError::ResendFailed);

            let err = flow.resend(&broken).await.unwrap_err();

            assert_eq!(err, FlowError::ResendFailed);
        }

        #[tokio::test]
        async fn reset_returns_to_empty_search() {
            let (registry, _) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let mut flow = test_flow();
            flow.set_identity_input(IDENTITY);
            flow.search(&registry).await.unwrap();
            flow.resend(&registry).await.unwrap();

            flow.reset();

            assert_eq!(flow.step(), ResendStep::Search);
            assert_eq!(flow.identity_input(), "");
            assert!(flow.found().is_none());
            assert!(flow.sent_to().is_none());
            assert!(flow.email_parts().is_empty());
        }

        #[tokio::test]
        async fn registry_is_usable_as_trait_object() {
            let (registry, id) = seeded_registry("carla@gmail.com", Arc::new(RecordingMailer::default()));
            let service: &dyn RegistrationService = &registry;
            assert!(service.resend_notifications(id).await.is_ok());
        }
    }
}
