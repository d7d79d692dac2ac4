// src/services/escopo.rs

/// Escopo de visibilidade resolvido a partir do usuário da sessão.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Escopo {
    /// Administradores enxergam todos os vendedores.
    Todos,
    /// Demais usuários enxergam exatamente um vendedor.
    Vendedor(String),
}

/// Usuários do portal com visão administrativa.
const ADMINS: [&str; 2] = ["roberto", "rosemeire"];

/// Logins do portal cujo nome não coincide com o vendedor das planilhas.
const APELIDOS: [(&str, &str); 2] = [("vendas", "ISAQUE"), ("vendas2", "MIGUEL")];

impl Escopo {
    /// Resolve o escopo de um username do portal. Função total: username
    /// desconhecido vira o próprio nome em caixa alta.
    pub fn para_usuario(username: &str) -> Self {
        let chave = username.to_lowercase();

        if ADMINS.contains(&chave.as_str()) {
            return Escopo::Todos;
        }

        for (login, vendedor) in APELIDOS {
            if chave == login {
                return Escopo::Vendedor(vendedor.to_string());
            }
        }

        Escopo::Vendedor(username.to_uppercase())
    }

    /// Interseção do escopo com o filtro `?vendedor=` da query string.
    /// `None` é o conjunto vazio: o chamador responde `[]` sem ir ao banco.
    /// Um vendedor pedindo outro vendedor cai nesse caso.
    pub fn com_filtro(self, vendedor: Option<&str>) -> Option<Escopo> {
        let pedido = match vendedor {
            Some(v) if !v.trim().is_empty() => v.trim().to_uppercase(),
            _ => return Some(self),
        };

        match self {
            Escopo::Todos => Some(Escopo::Vendedor(pedido)),
            Escopo::Vendedor(proprio) if proprio == pedido => Some(Escopo::Vendedor(proprio)),
            Escopo::Vendedor(_) => None,
        }
    }

    /// Valor para a cláusula de filtro das queries, `None` para visão completa.
    pub fn filtro(&self) -> Option<&str> {
        match self {
            Escopo::Todos => None,
            Escopo::Vendedor(vendedor) => Some(vendedor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn administradores_enxergam_tudo() {
        assert_eq!(Escopo::para_usuario("roberto"), Escopo::Todos);
        assert_eq!(Escopo::para_usuario("rosemeire"), Escopo::Todos);
        assert_eq!(Escopo::para_usuario("ROBERTO"), Escopo::Todos);
        assert_eq!(Escopo::para_usuario("Rosemeire"), Escopo::Todos);
    }

    #[test]
    fn apelidos_viram_o_vendedor_mapeado() {
        assert_eq!(
            Escopo::para_usuario("vendas"),
            Escopo::Vendedor("ISAQUE".to_string())
        );
        assert_eq!(
            Escopo::para_usuario("VENDAS2"),
            Escopo::Vendedor("MIGUEL".to_string())
        );
    }

    #[test]
    fn username_desconhecido_vira_caixa_alta() {
        assert_eq!(
            Escopo::para_usuario("joão"),
            Escopo::Vendedor("JOÃO".to_string())
        );
    }

    #[test]
    fn admin_com_filtro_restringe_ao_pedido() {
        assert_eq!(
            Escopo::Todos.com_filtro(Some("isaque")),
            Some(Escopo::Vendedor("ISAQUE".to_string()))
        );
    }

    #[test]
    fn admin_sem_filtro_segue_vendo_tudo() {
        assert_eq!(Escopo::Todos.com_filtro(None), Some(Escopo::Todos));
    }

    #[test]
    fn vendedor_pedindo_a_si_mesmo_nao_muda_nada() {
        let escopo = Escopo::Vendedor("MIGUEL".to_string());
        assert_eq!(
            escopo.com_filtro(Some("miguel")),
            Some(Escopo::Vendedor("MIGUEL".to_string()))
        );
    }

    #[test]
    fn vendedor_pedindo_outro_vendedor_fica_sem_nada() {
        let escopo = Escopo::Vendedor("MIGUEL".to_string());
        assert_eq!(escopo.com_filtro(Some("ISAQUE")), None);
    }

    #[test]
    fn filtro_em_branco_e_ignorado() {
        let escopo = Escopo::Vendedor("MIGUEL".to_string());
        assert_eq!(escopo.clone().com_filtro(Some("")), Some(escopo.clone()));
        assert_eq!(escopo.clone().com_filtro(Some("   ")), Some(escopo));
    }

    #[test]
    fn filtro_aplicado_nas_queries() {
        assert_eq!(Escopo::Todos.filtro(), None);
        assert_eq!(
            Escopo::Vendedor("ISAQUE".to_string()).filtro(),
            Some("ISAQUE")
        );
    }
}
