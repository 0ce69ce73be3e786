/// One section of the project overview screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverviewSection {
    pub title: &'static str,
    pub summary: &'static str,
    pub points: &'static [&'static str],
}

static SECTIONS: [OverviewSection; 4] = [
    OverviewSection {
        title: "1. Arquitetura de Dados",
        summary: "O sistema utiliza uma abordagem \"Lakehouse\" simplificada para lidar com dados estruturados e não estruturados.",
        points: &[
            "Ingestão (ETL): pipelines consultam o Wikidata (SPARQL) diariamente em busca de novas obras, ordenadas por popularidade.",
            "Enriquecimento: a API do Google Arts & Culture e a Wikipedia fornecem metadados textuais e visuais.",
            "Armazenamento: PostgreSQL para metadados relacionais (obras, artistas, vendas).",
            "Armazenamento: banco vetorial com embeddings das descrições para busca semântica (\"quadro que transmite paz\").",
        ],
    },
    OverviewSection {
        title: "2. Camada de IA (Gemini)",
        summary: "Pipeline de processamento de cada obra.",
        points: &[
            "Análise Visual: identifica paleta de cores, composição e elementos chave.",
            "Síntese Narrativa: cruza fatos históricos com psicologia das cores para gerar o \"Significado Emocional\".",
            "Geração de Produto: sugere molduras e ambientes (mockups) baseados no estilo da obra.",
        ],
    },
    OverviewSection {
        title: "3. Estratégia de Conteúdo",
        summary: "O \"Growth Loop\" é alimentado pela transformação de dados brutos em conteúdo compartilhável.",
        points: &[
            "Instagram Reels: zoom dinâmico na obra com narração TTS gerada pelo roteiro da IA.",
            "Carrossel Educativo: 5 slides, da obra inteira ao produto.",
        ],
    },
    OverviewSection {
        title: "4. Escalabilidade",
        summary: "Caminhos de expansão da plataforma.",
        points: &[
            "Internacionalização (i18n): tradução dos JSONs de análise para EN, ES, FR.",
            "Marketplace: artistas contemporâneos submetem obras para a mesma análise de IA.",
            "API B2B: licenciar a \"Curadoria via IA\" para museus e galerias físicas (QR Codes).",
        ],
    },
];

/// Static content of the overview screen.
pub fn project_overview() -> &'static [OverviewSection] {
    &SECTIONS
}

#[cfg(test)]
mod tests {
    use super::project_overview;

    #[test]
    fn covers_data_ai_and_commerce_layers() {
        let titles: Vec<_> = project_overview().iter().map(|s| s.title).collect();
        assert_eq!(titles.len(), 4);
        assert!(titles[0].contains("Dados"));
        assert!(titles[1].contains("Gemini"));
        assert!(project_overview().iter().all(|s| !s.points.is_empty()));
    }
}
