//! Built-in datasets used when nothing valid has been persisted yet.
//!
//! Every seeded record carries a fixed id so it can be addressed across runs
//! before anything has been written. Records added later get UUIDs.

use crate::content::{
    AboutContent, AboutTeaser, CompanyValue, HeroContent, ProcessContent, ProcessStep,
    ProcessTeaser, SiteContent, TechStackContent, TitledText, CONTENT_VERSION,
};
use crate::model::{
    PortfolioItem, Record, ServiceDraft, ServiceItem, SiteSettings, Socials, TeamMember,
    TeamMemberDraft,
};
use once_cell::sync::Lazy;

fn s(text: &str) -> String {
    text.to_string()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|i| i.to_string()).collect()
}

fn outline_icon(path: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke-width="1.5" stroke="currentColor"><path stroke-linecap="round" stroke-linejoin="round" d="{}" /></svg>"#,
        path
    )
}

fn portfolio_item(
    id: &str,
    title: &str,
    category: &str,
    image_url: &str,
    desafio: &str,
    solucao: &str,
    resultados: &str,
) -> PortfolioItem {
    PortfolioItem {
        id: s(id),
        image_url: s(image_url),
        title: s(title),
        category: s(category),
        desafio: Some(s(desafio)),
        solucao: Some(s(solucao)),
        resultados: Some(s(resultados)),
    }
}

static PORTFOLIO: Lazy<Vec<PortfolioItem>> = Lazy::new(|| {
    vec![
        portfolio_item(
            "1",
            "Plataforma SaaS de Gestão",
            "Aplicação Web",
            "https://images.unsplash.com/photo-1551434678-e076c223a692?q=80&w=800&auto=format&fit=crop",
            "Centralizar operações empresariais complexas em uma interface intuitiva.",
            "Desenvolvemos um dashboard interativo com design modular, permitindo customização e integração com APIs de terceiros.",
            "Aumento de 30% na eficiência operacional dos clientes e redução de 50% no tempo gasto em tarefas manuais.",
        ),
        portfolio_item(
            "2",
            "E-commerce de Moda",
            "E-commerce",
            "https://images.unsplash.com/photo-1441986300917-64674bd600d8?q=80&w=800&auto=format&fit=crop",
            "Criar uma experiência de compra online visualmente atraente e com alta taxa de conversão.",
            "Implementamos um design limpo, navegação por filtros avançados e um checkout otimizado em uma única página.",
            "Aumento de 150% nas vendas online no primeiro trimestre após o lançamento.",
        ),
        portfolio_item(
            "3",
            "App de Delivery",
            "Aplicação Mobile",
            "https://images.unsplash.com/photo-1526367790999-0150786686a2?q=80&w=800&auto=format&fit=crop",
            "Oferecer rastreamento de pedidos preciso e uma interface amigável para usuários e entregadores.",
            "Utilizamos geolocalização em tempo real via WebSockets e criamos duas interfaces distintas no mesmo app.",
            "Nota média de 4.8 nas lojas de aplicativos e mais de 50.000 downloads no primeiro mês.",
        ),
        portfolio_item(
            "4",
            "Portal de Educação",
            "Aplicação Web",
            "https://images.unsplash.com/photo-1501504905252-473c47e087f8?q=80&w=800&auto=format&fit=crop",
            "Construir uma plataforma EAD robusta para suportar milhares de alunos simultâneos.",
            "Arquitetura baseada em microserviços na AWS para escalabilidade e streaming de vídeo otimizado.",
            "Capacidade de suportar 10.000 alunos concorrentes sem degradação de performance.",
        ),
    ]
});

pub fn portfolio() -> Vec<PortfolioItem> {
    PORTFOLIO.clone()
}

fn service_templates() -> Vec<ServiceDraft> {
    vec![
        ServiceDraft {
            icon: outline_icon("M6.75 7.5l3 2.25-3 2.25m4.5 0h3m-9 8.25h13.5A2.25 2.25 0 0021 18V6a2.25 2.25 0 00-2.25-2.25H5.25A2.25 2.25 0 003 6v12a2.25 2.25 0 002.25 2.25z"),
            title: s("Desenvolvimento Web"),
            description: s("Construímos sites e aplicações web de alta performance, focados na experiência do usuário e otimizados para conversão."),
        },
        ServiceDraft {
            icon: outline_icon("M21 21l-5.197-5.197m0 0A7.5 7.5 0 105.196 5.196a7.5 7.5 0 0010.607 10.607z"),
            title: s("Otimização SEO"),
            description: s("Colocamos sua marca no topo dos resultados de busca, atraindo tráfego orgânico qualificado e aumentando sua visibilidade."),
        },
        ServiceDraft {
            icon: outline_icon("M2.25 18L9 11.25l4.306 4.307a11.95 11.95 0 015.814-5.519l2.74-1.22m0 0l-5.94-2.28m5.94 2.28l-2.28 5.941"),
            title: s("Marketing Digital"),
            description: s("Criamos estratégias de marketing digital integradas que geram leads, fortalecem sua marca e impulsionam suas vendas."),
        },
        ServiceDraft {
            icon: outline_icon("M9.53 16.122a3 3 0 00-5.78 1.128 2.25 2.25 0 01-2.4 2.245 4.5 4.5 0 008.4-2.245c0-.399-.078-.78-.22-1.128zm0 0a15.998 15.998 0 003.388-1.62m-5.043-.025a15.998 15.998 0 011.622-3.385m5.043.025a15.998 15.998 0 001.622-3.385m3.388 1.62a15.998 15.998 0 00-1.622-3.385m-5.043-.025a15.998 15.998 0 01-3.388-1.621m7.702 7.702a15.998 15.998 0 00-3.388 1.622m5.043.025a15.998 15.998 0 01-1.622 3.385m-5.043-.025a15.998 15.998 0 00-1.622 3.385m-3.388-1.62a15.998 15.998 0 001.622 3.385"),
            title: s("Identidade Visual"),
            description: s("Desenvolvemos marcas memoráveis, desde o logo até o manual da marca, que comunicam seus valores e se destacam no mercado."),
        },
    ]
}

pub fn services() -> Vec<ServiceItem> {
    service_templates()
        .into_iter()
        .zip(1..)
        .map(|(draft, n)| ServiceItem::from_draft(n.to_string(), draft))
        .collect()
}

fn team_templates() -> Vec<TeamMemberDraft> {
    vec![
        TeamMemberDraft {
            image_url: s("https://images.unsplash.com/photo-1573496359142-b8d87734a5a2?w=400&q=75&auto=format&fit=crop"),
            name: s("Ana Silva"),
            role: s("Líder de Produto"),
            bio: s("Apaixonada por criar produtos que os usuários amam, unindo visão de negócio com as necessidades do cliente."),
            socials: Socials {
                linkedin: Some(s("#")),
                twitter: Some(s("#")),
                github: None,
            },
        },
        TeamMemberDraft {
            image_url: s("https://images.unsplash.com/photo-1557862921-37829c790f19?w=400&q=75&auto=format&fit=crop"),
            name: s("Carlos Oliveira"),
            role: s("Arquiteto de Software"),
            bio: s("Especialista em construir sistemas escaláveis e robustos, garantindo a performance e segurança das aplicações."),
            socials: Socials {
                linkedin: Some(s("#")),
                twitter: None,
                github: Some(s("#")),
            },
        },
        TeamMemberDraft {
            image_url: s("https://images.unsplash.com/photo-1551836022-d5d88e9218df?w=400&q=75&auto=format&fit=crop"),
            name: s("Juliana Pereira"),
            role: s("Designer UX/UI"),
            bio: s("Focada em criar interfaces intuitivas e experiências memoráveis que encantam e engajam os usuários."),
            socials: Socials {
                linkedin: Some(s("#")),
                twitter: Some(s("#")),
                github: None,
            },
        },
    ]
}

pub fn team() -> Vec<TeamMember> {
    team_templates()
        .into_iter()
        .zip(1..)
        .map(|(draft, n)| TeamMember::from_draft(n.to_string(), draft))
        .collect()
}

pub fn settings() -> SiteSettings {
    SiteSettings {
        site_name: s("DevFlow"),
        whatsapp_number: s("5511999999999"),
        accent_color: s("#3b82f6"),
    }
}

static SITE_CONTENT: Lazy<SiteContent> = Lazy::new(|| SiteContent {
    version: CONTENT_VERSION,
    hero: HeroContent {
        h1: s(r#"Transformamos Ideias em <span class="text-accent">Soluções Digitais</span> de Impacto"#),
        h2: s("Somos especialistas em criar experiências web e mobile que impulsionam o crescimento do seu negócio. Do design à implementação, cuidamos de tudo para você."),
        button_text: s("Conheça Nossas Soluções"),
        button_link: s("/#solucoes"),
        background_image_url: s("https://images.unsplash.com/photo-1522071820081-009f0129c71c?q=80&w=2070&auto=format&fit=crop"),
        blur: 4.0,
        brightness: 70.0,
        opacity: 50.0,
    },
    tech_stack: TechStackContent {
        title: s(r#"Nossa <span class="text-accent">Caixa de Ferramentas</span> Tecnológicas"#),
        subtitle: s("Utilizamos as tecnologias mais modernas e robustas do mercado para construir soluções eficientes, escaláveis e seguras."),
    },
    about: AboutContent {
        headline: s(r#"Somos mais que uma agência, somos seu <span class="text-accent">parceiro estratégico</span> em tecnologia."#),
        subheadline: s("Nascemos da paixão por inovação e do desejo de ajudar empresas a prosperar no mundo digital. Nossa jornada é marcada pela busca incessante por excelência e por resultados que fazem a diferença."),
        main_text: s("Na DevFlow, acreditamos que a tecnologia é uma ferramenta poderosa para transformar negócios. Combinamos design centrado no usuário, engenharia de software de ponta e uma abordagem consultiva para entregar produtos digitais que não apenas atendem, mas superam as expectativas. Nossa cultura é de colaboração, aprendizado contínuo e compromisso total com o sucesso de nossos clientes."),
        mission: TitledText {
            title: s("Nossa Missão"),
            text: s("Empoderar empresas através de soluções digitais inovadoras, intuitivas e de alta performance, impulsionando seu crescimento e competitividade no mercado."),
        },
        vision: TitledText {
            title: s("Nossa Visão"),
            text: s("Ser referência em desenvolvimento de software e consultoria digital, reconhecida pela excelência técnica, criatividade e pela construção de parcerias duradouras."),
        },
        values: vec![
            CompanyValue {
                title: s("Inovação"),
                description: s("Buscamos constantemente novas tecnologias e abordagens para resolver problemas complexos."),
            },
            CompanyValue {
                title: s("Qualidade"),
                description: s("Nosso compromisso é com a entrega de produtos robustos, seguros e com acabamento impecável."),
            },
            CompanyValue {
                title: s("Parceria"),
                description: s("Trabalhamos lado a lado com nossos clientes, entendendo suas dores e celebrando suas vitórias."),
            },
            CompanyValue {
                title: s("Transparência"),
                description: s("Comunicação clara e honesta é a base de todos os nossos relacionamentos."),
            },
        ],
        teaser: AboutTeaser {
            headline: s(r#"Uma Agência com <span class="text-accent">Propósito</span>"#),
            p1: s("Na DevFlow, unimos criatividade e expertise técnica para criar soluções que não apenas funcionam, mas também encantam."),
            p2: s("Somos movidos pelo desafio de transformar ideias complexas em produtos digitais simples, elegantes e eficazes."),
            button_text: s("Conheça Nossa História"),
        },
    },
    process: ProcessContent {
        headline: s(r#"Nosso Caminho para o <span class="text-accent">Sucesso</span> do seu Projeto"#),
        subheadline: s("Seguimos um processo bem definido e transparente, garantindo que cada etapa do desenvolvimento seja executada com precisão, alinhada aos seus objetivos e com entregas de valor contínuas."),
        steps: vec![
            ProcessStep {
                title: s("Descoberta e Planejamento"),
                description: s("Mergulhamos no seu negócio para entender seus objetivos, desafios e público. Mapeamos requisitos e definimos a estratégia e o escopo do projeto."),
                deliverables: strings(&["Documento de Visão do Produto", "Mapa de Jornada do Usuário", "Backlog Priorizado"]),
                tools: strings(&["Figma", "Miro", "Jira"]),
            },
            ProcessStep {
                title: s("Design UX/UI"),
                description: s("Criamos a arquitetura da informação, fluxos de navegação e projetamos interfaces intuitivas e visualmente atraentes, focadas na melhor experiência para o usuário."),
                deliverables: strings(&["Wireframes e Protótipos Interativos", "Guia de Estilo Visual", "Design System"]),
                tools: strings(&["Figma", "Adobe XD", "Sketch"]),
            },
            ProcessStep {
                title: s("Desenvolvimento Ágil"),
                description: s("Com sprints quinzenais, nosso time de desenvolvimento transforma o design em código limpo, escalável e testável, com revisões e feedback contínuos."),
                deliverables: strings(&["Código-fonte em Repositório", "Builds para Testes (Staging)", "Relatórios de Sprint"]),
                tools: strings(&["React", "Node.js", "Docker", "GitHub"]),
            },
            ProcessStep {
                title: s("Testes e Qualidade"),
                description: s("Realizamos uma bateria de testes rigorosos – funcionais, de usabilidade, performance e segurança – para garantir um produto final robusto e livre de falhas."),
                deliverables: strings(&["Plano de Testes", "Relatório de Bugs", "Certificado de Qualidade"]),
                tools: strings(&["Jest", "Cypress", "Postman"]),
            },
            ProcessStep {
                title: s("Lançamento e Evolução"),
                description: s("Cuidamos de todo o processo de deploy em ambiente de produção. Após o lançamento, monitoramos a performance e oferecemos suporte e planos de evolução contínua."),
                deliverables: strings(&["Aplicação em Produção", "Documentação Técnica", "Dashboard de Monitoramento"]),
                tools: strings(&["Vercel", "AWS", "Datadog"]),
            },
        ],
        teaser: ProcessTeaser {
            headline: s(r#"Processo <span class="text-accent">Transparente</span>, Resultados <span class="text-accent">Concretos</span>"#),
            p1: s("Da ideia inicial ao lançamento e além, nosso processo é estruturado para garantir qualidade, previsibilidade e o máximo de valor para o seu investimento."),
            button_text: s("Veja Todas as Etapas"),
        },
    },
});

pub fn site_content() -> SiteContent {
    SITE_CONTENT.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn portfolio_seed_has_fixed_ids() {
        let ids: Vec<String> = portfolio().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4"]);
    }

    #[test]
    fn services_and_team_ids_are_stable_and_unique() {
        let first = services();
        let second = services();
        assert_eq!(first.len(), 4);
        assert_eq!(first, second);
        let ids: HashSet<_> = first.iter().map(|s| s.id.clone()).collect();
        assert_eq!(ids.len(), 4);

        let members = team();
        assert_eq!(members.len(), 3);
        assert_eq!(members, team());
        let ids: Vec<_> = members.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2", "3"]);
    }

    #[test]
    fn service_icons_are_svg_markup() {
        for service in services() {
            assert!(service.icon.starts_with("<svg"));
            assert!(service.icon.ends_with("</svg>"));
        }
    }

    #[test]
    fn site_content_has_five_process_steps() {
        let content = site_content();
        assert_eq!(content.process.steps.len(), 5);
        assert_eq!(content.about.values.len(), 4);
    }
}
