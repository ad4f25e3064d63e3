use crate::app::studio_app::MusicStudioApp;
use crate::ui_components::colors;
use eframe::egui::{self, RichText};

/// Sign-in / sign-up form. Submitting spawns a background auth task; the
/// router moves to the dashboard once a session exists.
pub fn render_login_view(app: &mut MusicStudioApp, ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(60.0);
        ui.label(
            RichText::new(if app.auth.signup_mode {
                "Create your account"
            } else {
                "Welcome back"
            })
            .size(26.0)
            .color(colors::TEXT_PRIMARY)
            .strong(),
        );
        ui.add_space(24.0);

        let mut submit = false;

        egui::Frame::default()
            .fill(colors::BG_CARD)
            .corner_radius(egui::CornerRadius::same(8))
            .inner_margin(egui::Margin::same(20))
            .show(ui, |ui| {
                ui.set_width(320.0);

                if app.auth.signup_mode {
                    ui.label(RichText::new("Name").size(13.0).color(colors::TEXT_SECONDARY));
                    ui.add_sized(
                        egui::vec2(300.0, 30.0),
                        egui::TextEdit::singleline(&mut app.auth.name_input)
                            .hint_text("Your display name"),
                    );
                    ui.add_space(10.0);
                }

                ui.label(RichText::new("Email").size(13.0).color(colors::TEXT_SECONDARY));
                ui.add_sized(
                    egui::vec2(300.0, 30.0),
                    egui::TextEdit::singleline(&mut app.auth.email_input)
                        .hint_text("you@example.com"),
                );
                ui.add_space(10.0);

                ui.label(
                    RichText::new("Password")
                        .size(13.0)
                        .color(colors::TEXT_SECONDARY),
                );
                let password_response = ui.add_sized(
                    egui::vec2(300.0, 30.0),
                    egui::TextEdit::singleline(&mut app.auth.password_input)
                        .password(true)
                        .hint_text("••••••••"),
                );
                if password_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter))
                {
                    submit = true;
                }

                if let Some(error) = &app.auth.auth_error {
                    ui.add_space(10.0);
                    ui.label(RichText::new(error).size(13.0).color(colors::DANGER));
                }

                ui.add_space(16.0);
                if app.auth.auth_in_progress {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.label(
                            RichText::new("Signing in...")
                                .size(13.0)
                                .color(colors::TEXT_SECONDARY),
                        );
                    });
                } else {
                    let label = if app.auth.signup_mode {
                        "Create account"
                    } else {
                        "Sign in"
                    };
                    if ui
                        .add_sized(
                            egui::vec2(300.0, 36.0),
                            egui::Button::new(RichText::new(label).size(15.0)),
                        )
                        .clicked()
                    {
                        submit = true;
                    }
                }
            });

        ui.add_space(14.0);
        let switch_label = if app.auth.signup_mode {
            "Already have an account? Sign in"
        } else {
            "New here? Create an account"
        };
        if ui
            .link(RichText::new(switch_label).size(13.0).color(colors::ACCENT))
            .clicked()
        {
            app.auth.signup_mode = !app.auth.signup_mode;
            app.auth.auth_error = None;
        }

        if submit && !app.auth.auth_in_progress {
            app.submit_auth();
        }
    });
}
