//! Stylesheets injected by the widget into host pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! The widget cannot rely on host CSS, so it ships its own rules as `<style>`
//! elements in `<head>`. Each sheet is a singleton keyed by element id: a
//! second widget construction finds the existing element and leaves it alone.

pub const WIDGET_STYLE_ID: &str = "erp-chat-widget-styles";
pub const THEME_STYLE_ID: &str = "erp-chat-themes";

/// Insert `<style id=..>` with `css` unless it already exists.
///
/// Returns `true` when a new element was inserted.
#[cfg(feature = "hydrate")]
pub fn ensure_style(id: &str, css: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    if document.get_element_by_id(id).is_some() {
        return false;
    }
    let (Some(head), Ok(style)) = (document.head(), document.create_element("style")) else {
        return false;
    };
    style.set_id(id);
    style.set_text_content(Some(css));
    head.append_child(&style).is_ok()
}

#[cfg(not(feature = "hydrate"))]
pub fn ensure_style(id: &str, css: &str) -> bool {
    let _ = (id, css);
    false
}

/// Remove the `<style>` element with `id`, if present.
pub fn remove_style(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.get_element_by_id(id)) {
            el.remove();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

pub const WIDGET_CSS: &str = r"
.erp-chat-widget {
    position: fixed;
    z-index: 10000;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
.erp-chat-widget.bottom-right { bottom: 20px; right: 20px; }
.erp-chat-widget.bottom-left { bottom: 20px; left: 20px; }

.chat-toggle {
    width: 60px;
    height: 60px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    box-shadow: 0 4px 20px rgba(0, 0, 0, 0.15);
    transition: all 0.3s ease;
    position: relative;
}
.chat-toggle:hover { transform: scale(1.05); box-shadow: 0 6px 25px rgba(0, 0, 0, 0.2); }
.chat-icon { color: white; transition: transform 0.3s ease; }
.erp-chat-widget.open .chat-icon { transform: rotate(180deg); }
.notification-badge {
    position: absolute;
    top: -5px;
    right: -5px;
    background: #ff4757;
    color: white;
    border-radius: 50%;
    width: 20px;
    height: 20px;
    font-size: 12px;
    display: flex;
    align-items: center;
    justify-content: center;
    font-weight: bold;
}

.chat-window {
    position: absolute;
    bottom: 70px;
    right: 0;
    width: 350px;
    height: 500px;
    background: white;
    border-radius: 12px;
    box-shadow: 0 10px 40px rgba(0, 0, 0, 0.15);
    display: flex;
    flex-direction: column;
    opacity: 0;
    transform: translateY(20px) scale(0.95);
    pointer-events: none;
    transition: all 0.3s cubic-bezier(0.4, 0, 0.2, 1);
}
.erp-chat-widget.bottom-left .chat-window { right: auto; left: 0; }
.erp-chat-widget.open .chat-window { opacity: 1; transform: translateY(0) scale(1); pointer-events: all; }

.chat-header {
    padding: 16px 20px;
    background: linear-gradient(135deg, #667eea 0%, #764ba2 100%);
    color: white;
    border-radius: 12px 12px 0 0;
    display: flex;
    justify-content: space-between;
    align-items: center;
}
.chat-title { display: flex; align-items: center; gap: 8px; }
.title-text { font-weight: 600; font-size: 16px; }
.status-indicator { color: #4ade80; font-size: 12px; }
.chat-controls { display: flex; gap: 8px; }
.control-btn {
    background: rgba(255, 255, 255, 0.2);
    border: none;
    border-radius: 6px;
    width: 28px;
    height: 28px;
    display: flex;
    align-items: center;
    justify-content: center;
    cursor: pointer;
    color: white;
    transition: background 0.2s ease;
}
.control-btn:hover { background: rgba(255, 255, 255, 0.3); }

.chat-messages {
    flex: 1;
    padding: 16px;
    overflow-y: auto;
    display: flex;
    flex-direction: column;
    gap: 12px;
}
.welcome-message { display: flex; gap: 12px; align-items: flex-start; }
.bot-avatar {
    width: 32px;
    height: 32px;
    background: #f1f5f9;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 16px;
    flex-shrink: 0;
}
.welcome-text p { margin: 0; color: #64748b; font-size: 14px; line-height: 1.5; }

.message { display: flex; gap: 12px; align-items: flex-start; animation: fadeInUp 0.3s ease; }
.message.user { flex-direction: row-reverse; }
.message-avatar {
    width: 32px;
    height: 32px;
    border-radius: 50%;
    display: flex;
    align-items: center;
    justify-content: center;
    font-size: 14px;
    flex-shrink: 0;
}
.message.user .message-avatar { background: #667eea; color: white; }
.message.bot .message-avatar { background: #f1f5f9; color: #64748b; }
.message-content {
    max-width: 80%;
    background: #f8fafc;
    padding: 12px 16px;
    border-radius: 12px;
    font-size: 14px;
    line-height: 1.5;
    color: #334155;
    white-space: pre-wrap;
    word-break: break-word;
}
.message.user .message-content { background: #667eea; color: white; }

.chat-input-container { padding: 16px; border-top: 1px solid #e2e8f0; }
.chat-input { display: flex; gap: 8px; align-items: center; }
.chat-input input {
    flex: 1;
    padding: 12px 16px;
    border: 1px solid #e2e8f0;
    border-radius: 24px;
    font-size: 14px;
    outline: none;
    transition: border-color 0.2s ease;
}
.chat-input input:focus { border-color: #667eea; }
.send-btn {
    width: 40px;
    height: 40px;
    background: #667eea;
    border: none;
    border-radius: 50%;
    color: white;
    cursor: pointer;
    display: flex;
    align-items: center;
    justify-content: center;
    transition: all 0.2s ease;
}
.send-btn:disabled { background: #cbd5e1; cursor: not-allowed; }
.send-btn:not(:disabled):hover { background: #5a67d8; transform: scale(1.05); }

.typing-indicator { display: flex; gap: 12px; align-items: flex-start; }
.typing-dots { display: flex; gap: 4px; padding: 12px 16px; background: #f8fafc; border-radius: 12px; }
.typing-dot {
    width: 8px;
    height: 8px;
    background: #cbd5e1;
    border-radius: 50%;
    animation: typingPulse 1.4s infinite ease-in-out;
}
.typing-dot:nth-child(2) { animation-delay: 0.2s; }
.typing-dot:nth-child(3) { animation-delay: 0.4s; }

@keyframes fadeInUp {
    from { opacity: 0; transform: translateY(10px); }
    to { opacity: 1; transform: translateY(0); }
}
@keyframes typingPulse {
    0%, 60%, 100% { transform: scale(1); opacity: 0.5; }
    30% { transform: scale(1.2); opacity: 1; }
}

@media (max-width: 768px) {
    .erp-chat-widget.bottom-right { bottom: 10px; right: 10px; }
    .chat-window {
        width: calc(100vw - 40px);
        height: calc(100vh - 120px);
        max-width: 350px;
        max-height: 500px;
    }
}
";

pub const THEME_CSS: &str = r"
.erp-chat-widget.sap-fiori .chat-toggle,
.erp-chat-widget.sap-fiori .chat-header {
    background: linear-gradient(135deg, #0070f2 0%, #005cb9 100%);
}
.erp-chat-widget.oracle .chat-toggle,
.erp-chat-widget.oracle .chat-header {
    background: linear-gradient(135deg, #ff0000 0%, #cc0000 100%);
}
.erp-chat-widget.microsoft .chat-toggle,
.erp-chat-widget.microsoft .chat-header {
    background: linear-gradient(135deg, #0078d4 0%, #106ebe 100%);
}
.erp-chat-widget.bottom-right.erp-adjusted { bottom: 30px; right: 30px; }
.erp-chat-widget.bottom-left.erp-adjusted { bottom: 30px; left: 30px; }
.erp-chat-widget { z-index: var(--erp-chat-z-index, 10000) !important; }
";

pub const HOME_CSS: &str = r"
* { box-sizing: border-box; }
body {
    margin: 0;
    font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
    background: #f8fafc;
    color: #1e293b;
}
.home-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 16px 32px;
    background: white;
    border-bottom: 1px solid #e2e8f0;
}
.home-header__brand { font-weight: 700; font-size: 20px; color: #667eea; }
.auth-btn {
    padding: 8px 16px;
    border: 1px solid #667eea;
    border-radius: 8px;
    background: white;
    color: #667eea;
    cursor: pointer;
}
.home-main { max-width: 1080px; margin: 0 auto; padding: 48px 24px; text-align: center; }
.home-title { margin: 0 0 8px; font-size: 32px; }
.home-subtitle { margin: 0 0 32px; color: #64748b; }
.industry-grid {
    display: grid;
    grid-template-columns: repeat(auto-fit, minmax(280px, 1fr));
    gap: 20px;
    margin-bottom: 32px;
}
.industry-card {
    background: white;
    border: 2px solid #e2e8f0;
    border-radius: 12px;
    padding: 24px;
    cursor: pointer;
    transition: all 0.2s ease;
}
.industry-card:hover { border-color: #a5b4fc; transform: translateY(-2px); }
.industry-card.selected { border-color: #667eea; box-shadow: 0 0 0 3px rgba(102, 126, 234, 0.25); }
.industry-icon { font-size: 40px; margin-bottom: 12px; }
.industry-name { margin: 0 0 8px; font-size: 18px; }
.industry-description { margin: 0; color: #64748b; font-size: 14px; line-height: 1.5; }
.continue-btn {
    padding: 14px 32px;
    border: none;
    border-radius: 8px;
    background: #667eea;
    color: white;
    font-size: 16px;
    cursor: pointer;
}
.continue-btn:disabled { background: #cbd5e1; cursor: not-allowed; }
";
