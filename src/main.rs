use js_sys::Date;
use yew::prelude::*;

// Injected by the deploy workflow (BUILD_NUMBER=${{ github.run_number }}).
// Local `trunk serve` builds have no build number and show "#local".
const BUILD_NUMBER: Option<&str> = option_env!("BUILD_NUMBER");

const COURSE_URL: &str = "https://postech.fiap.com.br/curso/devops-e-arquitetura-cloud";
const FIAP_URL: &str = "https://fiap.com.br";

const TECH_STACK: [&str; 4] = ["Rust + Yew", "GitHub Actions", "AWS S3", "Static Hosting"];

fn build_number_label(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "local".to_string(),
    }
}

// dd/mm/yyyy, HH:MM:SS — what toLocaleString('pt-BR') gives in the browser.
fn format_pt_br(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> String {
    format!(
        "{:02}/{:02}/{:04}, {:02}:{:02}:{:02}",
        day, month, year, hour, minute, second
    )
}

fn deploy_timestamp() -> String {
    let now = Date::new_0();
    format_pt_br(
        now.get_full_year() as i32,
        (now.get_month() + 1) as u32, // JS months are 0-11
        now.get_date() as u32,
        now.get_hours() as u32,
        now.get_minutes() as u32,
        now.get_seconds() as u32,
    )
}

#[function_component(App)]
fn app() -> Html {
    // Captured once per mount, before the first paint. No effect, no re-render.
    let deploy_time = use_state(deploy_timestamp);
    let build_number = use_state(|| build_number_label(BUILD_NUMBER));

    html! {
        <div class="app">
            <header class="app-header">
                <div class="fiap-logo">
                    <h1>{ "FIAP" }</h1>
                    <span>{ "POS TECH" }</span>
                </div>

                <div class="main-content">
                    <h2>{ "DevOps e Arquitetura Cloud" }</h2>
                    <h3>{ "Demo de CI/CD com GitHub Actions" }</h3>

                    <div class="demo-info">
                        <div class="info-card">
                            <h4>{ "🚀 Pipeline Status" }</h4>
                            <p class="status-success">{ "Deploy Realizado com Sucesso!" }</p>
                        </div>

                        <div class="info-card">
                            <h4>{ "📅 Último Deploy" }</h4>
                            <p>{ &*deploy_time }</p>
                        </div>

                        <div class="info-card">
                            <h4>{ "🔢 Build Number" }</h4>
                            <p>{ format!("#{}", *build_number) }</p>
                        </div>
                    </div>

                    <div class="tech-stack">
                        <h4>{ "Stack Tecnológico" }</h4>
                        <div class="tech-items">
                            { for TECH_STACK.iter().map(|t| html! {
                                <span class="tech-item">{ *t }</span>
                            }) }
                        </div>
                    </div>

                    <div class="course-info">
                        <h4>{ "Sobre o Curso" }</h4>
                        <p>
                            <strong>{ "DOMINE O CICLO COMPLETO DE DEVOPS, DO CÓDIGO À ENTREGA!" }</strong>
                        </p>
                        <p>
                            { "No curso de DevOps e Arquitetura Cloud, você se prepara para assumir \
                               um papel estratégico no universo DevOps. Integre práticas ágeis, \
                               automação e ferramentas de ponta para conectar desenvolvimento, \
                               infraestrutura e operações de forma fluida, segura e escalável." }
                        </p>
                        <div class="links">
                            <a
                                href={COURSE_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="course-link"
                            >
                                { "Conheça o Curso" }
                            </a>
                            <a
                                href={FIAP_URL}
                                target="_blank"
                                rel="noopener noreferrer"
                                class="fiap-link"
                            >
                                { "FIAP.com.br" }
                            </a>
                        </div>
                    </div>
                </div>

                <footer class="app-footer">
                    <p>{ "© 2025 FIAP - Faculdade de Informática e Administração Paulista" }</p>
                    <p>{ "Desenvolvido para fins educacionais" }</p>
                </footer>
            </header>
        </div>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_label_defaults_to_local() {
        assert_eq!(build_number_label(None), "local");
        assert_eq!(build_number_label(Some("")), "local");
        assert_eq!(build_number_label(Some("   ")), "local");
    }

    #[test]
    fn build_label_uses_ci_run_number() {
        assert_eq!(build_number_label(Some("42")), "42");
        assert_eq!(build_number_label(Some(" 42 ")), "42");
        assert_eq!(format!("#{}", build_number_label(Some("42"))), "#42");
        assert_eq!(format!("#{}", build_number_label(None)), "#local");
    }

    #[test]
    fn timestamp_is_day_month_year_zero_padded() {
        assert_eq!(format_pt_br(2025, 8, 3, 9, 5, 7), "03/08/2025, 09:05:07");
        assert_eq!(format_pt_br(2025, 12, 31, 23, 59, 59), "31/12/2025, 23:59:59");
    }

    #[test]
    fn tech_stack_is_the_four_fixed_labels() {
        assert_eq!(
            TECH_STACK,
            ["Rust + Yew", "GitHub Actions", "AWS S3", "Static Hosting"]
        );
    }

    #[test]
    fn outbound_links_are_fixed() {
        assert_eq!(
            COURSE_URL,
            "https://postech.fiap.com.br/curso/devops-e-arquitetura-cloud"
        );
        assert_eq!(FIAP_URL, "https://fiap.com.br");
    }
}
