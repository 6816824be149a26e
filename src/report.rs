use crate::community::Post;
use crate::model::{ProgressMap, Sex, Stage};
use crate::progress::total_score;
use chrono::{Local, NaiveDate};
use std::fmt::Write as _;

const SEPARATOR: &str = "================================================";

/// Fecha de nacimiento tal y como la guarda el formulario (`AAAA-MM-DD`).
pub fn parse_birth_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
}

/// `AAAA-MM-DD` → `DD/MM/AAAA`. Vacía: marcador; ilegible: "Data Inválida".
pub fn format_birth_date(raw: &str) -> String {
    if raw.trim().is_empty() {
        return "DD/MM/AAAA".to_string();
    }
    match parse_birth_date(raw) {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => {
            log::warn!("Data de nascimento ilegível: {raw}");
            "Data Inválida".to_string()
        }
    }
}

pub struct ReportInput<'a> {
    pub user_name: &'a str,
    pub birth_date: &'a str,
    pub stages: &'a [Stage],
    pub progress: &'a ProgressMap,
    pub posts: &'a [Post],
}

/// Relatório en texto plano para copiar y enviar al responsable del estudio.
pub fn build_report(input: &ReportInput<'_>) -> String {
    let birth = if input.birth_date.trim().is_empty() {
        "Não informada".to_string()
    } else {
        format_birth_date(input.birth_date)
    };

    let mut out = String::new();
    // `write!` sobre String no puede fallar
    let _ = writeln!(out, "RELATÓRIO DE PROGRESSO - IDENTIDADE EM CRISTO");
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = writeln!(out);
    let _ = writeln!(out, "INFORMAÇÕES DO PARTICIPANTE");
    let _ = writeln!(out, "Nome: {}", input.user_name);
    let _ = writeln!(out, "Data de Nascimento: {birth}");
    let _ = writeln!(out);
    let _ = writeln!(out, "DESEMPENHO GERAL");
    let _ = writeln!(out, "Pontuação Total: {}", total_score(input.progress));
    let _ = writeln!(out);
    let _ = writeln!(out, "PROGRESSO NAS ETAPAS");
    for stage in input.stages {
        let _ = writeln!(out, "{}", stage.title);
        match input.progress.get(&stage.id).filter(|p| p.completed) {
            Some(p) => {
                let reflection = if p.reflection.trim().is_empty() {
                    "Nenhuma reflexão registrada."
                } else {
                    p.reflection.as_str()
                };
                let _ = writeln!(out, "- Pontuação: {}", p.score);
                let _ = writeln!(out, "- Reflexão Pessoal: {reflection}");
            }
            None => {
                let _ = writeln!(out, "- não concluída");
            }
        }
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "PUBLICAÇÕES NO MURAL DA COMUNIDADE");
    let mut own = input.posts.iter().filter(|p| p.is_user_post).peekable();
    if own.peek().is_none() {
        let _ = writeln!(out, "Nenhuma publicação feita.");
    }
    for post in own {
        let _ = writeln!(out, "- {}", post.message);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{SEPARATOR}");
    let _ = write!(out, "Fim do Relatório.");
    out
}

/// Datos de la "Carteira de Identidade Espiritual".
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentityCard {
    pub name: String,
    pub birth_date: String,
    pub sex: Sex,
    pub issued_on: String,
    pub status: &'static str,
    pub profession: &'static str,
}

impl IdentityCard {
    pub fn new(name: &str, birth_date: &str, sex: Sex, issued_on: NaiveDate) -> Self {
        let (status, profession) = match sex {
            Sex::Feminino => ("Filha Amada e Escolhida", "Embaixadora de Cristo"),
            Sex::Masculino => ("Filho Amado e Escolhido", "Embaixador de Cristo"),
        };
        Self {
            name: name.to_string(),
            birth_date: format_birth_date(birth_date),
            sex,
            issued_on: issued_on.format("%d/%m/%Y").to_string(),
            status,
            profession,
        }
    }

    /// Expedida hoy.
    pub fn issue_today(name: &str, birth_date: &str, sex: Sex) -> Self {
        Self::new(name, birth_date, sex, Local::now().date_naive())
    }

    pub fn to_text(&self) -> String {
        let sex = match self.sex {
            Sex::Masculino => "Masculino",
            Sex::Feminino => "Feminino",
        };
        [
            "REPÚBLICA FEDERATIVA DE DEUS".to_string(),
            "CARTEIRA DE IDENTIDADE ESPIRITUAL".to_string(),
            format!("Nome: {}", self.name),
            "Filiação: Deus Pai".to_string(),
            format!("Nascimento: {}", self.birth_date),
            format!("Sexo: {sex}"),
            format!("Status: {}", self.status),
            format!("Profissão: {}", self.profession),
            format!("Expedição: {}", self.issued_on),
            "Válida Enquanto a Fé Estiver Fundamentada em Jesus Cristo!".to_string(),
        ]
        .join("\n")
    }
}

pub fn liberation_letter(name: &str) -> String {
    format!(
        "DECLARAÇÃO DE LIBERDADE EM CRISTO\n\n\
         Pelo presente documento, declara-se que {name}, anteriormente cativo(a) pela lei do pecado e da morte, \
         foi plenamente e eternamente liberto(a) pelo sangue de Jesus Cristo.\n\n\
         Toda dívida foi paga na cruz. Não há mais condenação, culpa ou acusação válidas diante de Deus. \
         A antiga natureza foi crucificada com Cristo, e uma nova vida foi concedida.\n\n\
         Esta alforria é irrevogável, selada pelo Espírito Santo, e garante todos os direitos de filho(a) \
         amado(a) e herdeiro(a) do Reino de Deus.\n\n\
         - Assinado: O Rei dos Reis"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StageProgress;

    fn stage(id: u32, title: &str) -> Stage {
        Stage {
            id,
            title: title.into(),
            video_url: String::new(),
            reflection: String::new(),
            motivation: String::new(),
            questions: Vec::new(),
        }
    }

    fn post(id: u64, message: &str, own: bool) -> Post {
        Post {
            id,
            author: "x".into(),
            message: message.into(),
            likes: 0,
            is_liked: false,
            is_user_post: own,
            comments: Vec::new(),
        }
    }

    #[test]
    fn birth_date_formats() {
        assert_eq!(format_birth_date("1999-12-31"), "31/12/1999");
        assert_eq!(format_birth_date(""), "DD/MM/AAAA");
        assert_eq!(format_birth_date("31-12-1999"), "Data Inválida");
    }

    #[test]
    fn report_lists_every_stage_and_own_posts() {
        let stages = vec![stage(1, "Etapa 1: Filhos"), stage(2, "Etapa 2: Herdeiros")];
        let mut progress = ProgressMap::new();
        progress.insert(
            1,
            StageProgress {
                score: 900,
                reflection: "Sou filho".into(),
                completed: true,
            },
        );
        let posts = vec![post(2, "meu post", true), post(1, "de outro", false)];
        let report = build_report(&ReportInput {
            user_name: "Pedro",
            birth_date: "",
            stages: &stages,
            progress: &progress,
            posts: &posts,
        });
        assert!(report.contains("Nome: Pedro"));
        assert!(report.contains("Data de Nascimento: Não informada"));
        assert!(report.contains("Pontuação Total: 900"));
        assert!(report.contains("- Reflexão Pessoal: Sou filho"));
        assert!(report.contains("Etapa 2: Herdeiros\n- não concluída"));
        assert!(report.contains("- meu post"));
        assert!(!report.contains("de outro"));
        assert!(report.ends_with("Fim do Relatório."));
    }

    #[test]
    fn report_without_posts_says_so() {
        let report = build_report(&ReportInput {
            user_name: "Ana",
            birth_date: "2000-01-02",
            stages: &[],
            progress: &ProgressMap::new(),
            posts: &[],
        });
        assert!(report.contains("Data de Nascimento: 02/01/2000"));
        assert!(report.contains("Nenhuma publicação feita."));
        assert!(report.contains("Pontuação Total: 0"));
    }

    #[test]
    fn identity_card_wording_follows_sex() {
        let issued = NaiveDate::from_ymd_opt(2024, 5, 7).unwrap();
        let card = IdentityCard::new("Lia", "1990-07-15", Sex::Feminino, issued);
        assert_eq!(card.status, "Filha Amada e Escolhida");
        assert_eq!(card.profession, "Embaixadora de Cristo");
        assert_eq!(card.issued_on, "07/05/2024");
        assert_eq!(card.birth_date, "15/07/1990");
        assert!(card.to_text().contains("Sexo: Feminino"));

        let card = IdentityCard::new("Léo", "", Sex::Masculino, issued);
        assert_eq!(card.status, "Filho Amado e Escolhido");
        assert_eq!(card.profession, "Embaixador de Cristo");
    }

    #[test]
    fn letter_names_the_user() {
        let letter = liberation_letter("Marta");
        assert!(letter.starts_with("DECLARAÇÃO DE LIBERDADE EM CRISTO"));
        assert!(letter.contains("declara-se que Marta,"));
    }
}
