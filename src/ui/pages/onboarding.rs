//! Sign in, sign up and password reset forms.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::{render_fields, with_mello, PageContext};
use crate::domain::forms::PasswordStrength;
use crate::state::forgot_password::ResetSlot;
use crate::state::login::LoginSlot;
use crate::state::signup::SignupSlot;
use crate::state::{ForgotPasswordState, LoginState, SignupState};
use crate::ui::components::{render_button_row, ButtonItem, InputFieldConfig};
use crate::ui::helpers::{card_block, checkbox, heading, list_row, muted};
use crate::ui::theme::Palette;

fn strength_line(strength: PasswordStrength, palette: Palette) -> Line<'static> {
    let color = match strength {
        PasswordStrength::Weak => palette.recording,
        PasswordStrength::Good => palette.warning,
        PasswordStrength::Strong => palette.success,
    };
    let filled = strength.segments();
    Line::from(vec![
        Span::styled("Strength ", Style::default().fg(palette.muted)),
        Span::styled("▮".repeat(filled), Style::default().fg(color)),
        Span::styled("▯".repeat(3 - filled), Style::default().fg(palette.border)),
        Span::styled(
            format!(" {}", strength.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ])
}

pub fn render_login(frame: &mut Frame, area: Rect, state: &LoginState, page: &PageContext) {
    let content = with_mello(frame, area, &state.mello, page);
    let palette = page.palette;
    let block = card_block("Welcome Back!", false, palette);
    let inner = block.inner(content);
    frame.render_widget(block, content);

    let focus = state.focus.current();
    let fields = [
        InputFieldConfig::new("Email", &state.email)
            .placeholder("you@example.com")
            .focused(focus == Some(LoginSlot::Email)),
        InputFieldConfig::new("Password", &state.password)
            .placeholder("Your password")
            .masked(!state.show_password)
            .focused(focus == Some(LoginSlot::Password)),
    ];
    let rest = render_fields(frame, inner, &fields, page);

    let buttons = [ButtonItem::new("Sign In")];
    let lines = vec![
        checkbox(
            "Show password",
            state.show_password,
            focus == Some(LoginSlot::ShowPassword),
            palette,
        ),
        Line::default(),
        render_button_row(
            &buttons,
            (focus == Some(LoginSlot::SignIn)).then_some(0),
            &page.layout,
            palette,
        ),
        Line::default(),
        list_row("Forgot password?", "", focus == Some(LoginSlot::ForgotPassword), palette),
        list_row(
            "Sign up",
            "Don't have an account?",
            focus == Some(LoginSlot::SignUp),
            palette,
        ),
        list_row("Back to home", "", focus == Some(LoginSlot::Back), palette),
    ];
    frame.render_widget(Paragraph::new(lines), rest);
}

pub fn render_signup(frame: &mut Frame, area: Rect, state: &SignupState, page: &PageContext) {
    let content = with_mello(frame, area, &state.mello, page);
    let palette = page.palette;
    let block = card_block("Create Your Account", false, palette);
    let inner = block.inner(content);
    frame.render_widget(block, content);

    let focus = state.focus.current();
    let fields = [
        InputFieldConfig::new("Full Name", &state.name)
            .placeholder("Your name")
            .focused(focus == Some(SignupSlot::Name)),
        InputFieldConfig::new("Email", &state.email)
            .placeholder("you@example.com")
            .focused(focus == Some(SignupSlot::Email)),
        InputFieldConfig::new("Password", &state.password)
            .placeholder("Choose a password")
            .masked(!state.show_password)
            .focused(focus == Some(SignupSlot::Password)),
        InputFieldConfig::new("Confirm Password", &state.confirm)
            .placeholder("Type it again")
            .masked(!state.show_confirm)
            .focused(focus == Some(SignupSlot::Confirm)),
    ];
    let rest = render_fields(frame, inner, &fields, page);

    let mut lines = Vec::new();
    if let Some(strength) = state.strength() {
        lines.push(strength_line(strength, palette));
    }
    match state.passwords_match() {
        Some(true) => lines.push(Line::from(Span::styled(
            "✓ Passwords match",
            Style::default().fg(palette.success),
        ))),
        Some(false) => lines.push(Line::from(Span::styled(
            "✗ Passwords do not match",
            Style::default().fg(palette.recording),
        ))),
        None => {}
    }
    lines.push(checkbox(
        "Show password",
        state.show_password,
        focus == Some(SignupSlot::ShowPassword),
        palette,
    ));
    lines.push(checkbox(
        "Show confirmation",
        state.show_confirm,
        focus == Some(SignupSlot::ShowConfirm),
        palette,
    ));
    lines.push(checkbox(
        "I agree to the Terms and Conditions",
        state.accepted_terms,
        focus == Some(SignupSlot::Terms),
        palette,
    ));
    let buttons = [ButtonItem::new("Create Account"), ButtonItem::new("Back")];
    let focused = match focus {
        Some(SignupSlot::Create) => Some(0),
        Some(SignupSlot::Back) => Some(1),
        _ => None,
    };
    lines.push(render_button_row(&buttons, focused, &page.layout, palette));
    frame.render_widget(Paragraph::new(lines), rest);
}

pub fn render_forgot_password(
    frame: &mut Frame,
    area: Rect,
    state: &ForgotPasswordState,
    page: &PageContext,
) {
    let palette = page.palette;
    let block = card_block("Reset Password", false, palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let focus = state.focus.current();

    let rest = match &state.sent_to {
        Some(email) => {
            let lines = vec![
                heading("Check your inbox!", palette),
                muted(&format!("We sent a reset link to {email}"), palette),
                Line::default(),
            ];
            let height = lines.len() as u16;
            frame.render_widget(Paragraph::new(lines), inner);
            Rect {
                y: inner.y + height.min(inner.height),
                height: inner.height.saturating_sub(height),
                ..inner
            }
        }
        None => {
            let fields = [InputFieldConfig::new("Email", &state.email)
                .placeholder("you@example.com")
                .focused(focus == Some(ResetSlot::Email))];
            render_fields(frame, inner, &fields, page)
        }
    };

    let buttons = [
        ButtonItem::new("Send Reset Link").enabled(state.sent_to.is_none()),
        ButtonItem::new("Back to Sign In"),
    ];
    let focused = match focus {
        Some(ResetSlot::Send) => Some(0),
        Some(ResetSlot::Back) => Some(1),
        _ => None,
    };
    frame.render_widget(
        Paragraph::new(render_button_row(&buttons, focused, &page.layout, palette)),
        rest,
    );
}
