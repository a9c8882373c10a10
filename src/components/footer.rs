use crate::app::state::{AppMode, AppState, StatusSeverity};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub enabled: bool,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

pub struct Footer<'a> {
    pub state: &'a AppState<'a>,
    pub theme: &'a Theme,
}

impl Footer<'_> {
    fn get_groups(&self) -> Vec<FooterGroup> {
        let controls = self.state.home.controls();
        match self.state.mode {
            AppMode::Home => vec![
                FooterGroup {
                    name: "VIDEO",
                    items: vec![
                        FooterItem {
                            key: "Enter",
                            desc: "analyze",
                            enabled: controls.analyze,
                        },
                        FooterItem {
                            key: "^S",
                            desc: "cache",
                            enabled: controls.cache,
                        },
                    ],
                },
                FooterGroup {
                    name: "APP",
                    items: vec![
                        FooterItem {
                            key: "^K",
                            desc: "command",
                            enabled: true,
                        },
                        FooterItem {
                            key: "^R",
                            desc: "recheck",
                            enabled: true,
                        },
                        FooterItem {
                            key: "^Q",
                            desc: "quit",
                            enabled: true,
                        },
                    ],
                },
            ],
            AppMode::CommandPalette => {
                let palette = &self.state.palette;
                let mut items = vec![
                    FooterItem {
                        key: "Enter",
                        desc: "ask",
                        enabled: palette.can_submit(self.state.home.video.url()),
                    },
                    FooterItem {
                        key: "Esc",
                        desc: "close",
                        enabled: true,
                    },
                ];
                if palette.shows_suggestions() {
                    items.push(FooterItem {
                        key: "Tab",
                        desc: "suggest",
                        enabled: true,
                    });
                } else {
                    items.push(FooterItem {
                        key: "PgUp/Dn",
                        desc: "scroll",
                        enabled: true,
                    });
                }
                vec![FooterGroup {
                    name: "ASK",
                    items,
                }]
            }
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = match &state.status {
            Some(msg) if msg.severity == StatusSeverity::Error => {
                Span::styled(format!("  ERROR: {}  ", msg.text), theme.status_error)
            }
            Some(msg) => Span::styled(format!("  {}  ", msg.text), theme.status_info),
            None => Span::styled("  READY  ", theme.status_ready),
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        if state.palette.is_loading() {
            spans.push(Span::styled(
                format!(" {} analyzing ", state.spinner()),
                theme.status_info,
            ));
            spans.push(Span::raw("  "));
        }

        let available_width = area.width.saturating_sub(4) as usize;
        let mut current_width = spans.iter().map(Span::width).sum::<usize>();

        for group in self.get_groups() {
            let Some(first_item) = group.items.first() else {
                continue;
            };
            let first_item_width = first_item.key.len() + first_item.desc.len() + 4;
            if current_width + first_item_width > available_width {
                break;
            }

            if area.width > 100 {
                let group_label = Span::styled(format!("{}: ", group.name), theme.text_secondary);
                if current_width + group_label.width() + first_item_width < available_width {
                    current_width += group_label.width();
                    spans.push(group_label);
                }
            }

            for item in group.items {
                let key_str = format!(" {} ", item.key);
                let desc_str = format!(" {} ", item.desc);
                let item_width = key_str.len() + desc_str.len();
                if current_width + item_width + 1 > available_width {
                    break;
                }

                let (key_style, val_style) = if item.enabled {
                    (theme.footer_segment_key, theme.footer_segment_val)
                } else {
                    (theme.dimmed, theme.dimmed)
                };
                spans.push(Span::styled(key_str, key_style));
                spans.push(Span::styled(desc_str, val_style));
                spans.push(Span::raw(" "));
                current_width += item_width + 1;
            }
            spans.push(Span::raw(" "));
            current_width += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.footer)
            .render(area, buf);
    }
}
