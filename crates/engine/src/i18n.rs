//! UI string localization.
//!
//! Four languages with a two-step fallback: a key missing in the active
//! language falls back to Turkish, and a key unknown even there comes back
//! verbatim so a typo surfaces in the UI instead of vanishing.

use serde::{Deserialize, Serialize};

/// Supported interface languages. Turkish is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Tr,
    En,
    Es,
    Fr,
}

impl Language {
    /// The language code as stored in settings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tr => "tr",
            Self::En => "en",
            Self::Es => "es",
            Self::Fr => "fr",
        }
    }
}

/// Translate `key` for `lang`.
///
/// Falls back to Turkish for keys the active language lacks, and returns
/// the key itself when no table knows it.
#[must_use]
pub fn translate(lang: Language, key: &str) -> &str {
    lookup(lang, key)
        .or_else(|| lookup(Language::Tr, key))
        .unwrap_or(key)
}

fn lookup(lang: Language, key: &str) -> Option<&'static str> {
    match lang {
        Language::Tr => lookup_tr(key),
        Language::En => lookup_en(key),
        Language::Es => lookup_es(key),
        Language::Fr => lookup_fr(key),
    }
}

fn lookup_tr(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.title" => "🏪 Dükkan Mal Takip Sistemi",
        "nav.subtitle" => "Envanterinizi Kolayca Yönetin",
        "nav.login" => "Giriş Yap",
        "nav.signup" => "Katıl",
        "nav.subs" => "Abonelikler",
        "nav.settings" => "Ayarlar",
        "nav.home" => "← Ana Sayfaya Dön",
        "nav.subLabel" => "Abonelik:",
        "nav.weekly" => "Haftalık Kalan:",
        "lang.tr" => "Türkçe",
        "lang.en" => "English",
        "lang.es" => "Español",
        "lang.fr" => "Français",
        "products.add" => "Yeni Ürün Ekle",
        "products.login_required" => "Ürün eklemek için giriş yapın veya kayıt olun",
        "products.add_requires_login" => "Lütfen ürün eklemek için giriş yapın",
        "login.title" => "🔐 Giriş Yap",
        "login.subtitle" => "Hesabınıza giriş yapın",
        "signup.title" => "📝 Yeni Hesap Oluştur",
        "signup.subtitle" => "Ücretsiz pakete başlayın",
        "btn.login" => "Giriş Yap",
        "btn.signup" => "Hesap Oluştur",
        "settings.title" => "⚙️ Ayarlar",
        "settings.subtitle" => "Hesap bilgilerinizi güncelleyin",
        "settings.account" => "Hesap",
        "settings.language" => "Dil",
        "settings.userLabel" => "Kullanıcı:",
        "settings.accountNote" => {
            "Giriş yapmadan sadece görüntülenen ismi değiştiremezsiniz. Lütfen giriş yapın."
        }
        "settings.displayLabel" => "Görünen İsim",
        "settings.passwordLabel" => "Yeni Şifre (isteğe bağlı)",
        "settings.addressLabel" => "Dükkan Adresi",
        "settings.addressPlaceholder" => "Dükkan adresinizi girin",
        "settings.avatarLabel" => "Profil Resmi",
        "remove_avatar" => "Resmi Kaldır",
        "settings.interface" => "Arayüz",
        "settings.interfaceNote" => {
            "Ayarlarınızı kişiselleştirin (Karanlık tema yok — siyah yapma isteğine göre açık tutuldu)."
        }
        "settings.themeLabel" => "Temayı Seç",
        "theme.light" => "Açık (varsayılan)",
        "theme.soft" => "Yumuşak",
        "theme.dark" => "Koyu",
        "save" => "Kaydet",
        "settings_saved" => "Ayarlar kaydedildi",
        "account_saved" => "Hesap ayarları kaydedildi",
        "confirm_delete_product" => "Bu ürünü silmek istiyor musunuz?",
        "delete_all_confirm" => "Tüm ürünler silinsin mi?",
        "product_deleted" => "Ürün silindi",
        "critical.title" => "Kritik",
        "critical.none" => "Kritik ürün yok",
        "critical.label" => "Kritik",
        "ok.label" => "Tamam",
        "login_wrong" => "Kullanıcı adı veya şifre yanlış",
        "signup_user_taken" => "Bu kullanıcı adı zaten alınmış",
        "username_password_required" => "Kullanıcı adı ve şifre gerekli",
        "account_changes_require_login" => "Hesap değişiklikleri için giriş yapın",
        "greeting" => "Hoşgeldiniz,",
        "logout" => "Çıkış",
        _ => return None,
    })
}

fn lookup_en(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.title" => "🏪 Shop Inventory",
        "nav.subtitle" => "Manage your inventory easily",
        "nav.login" => "Login",
        "nav.signup" => "Sign Up",
        "nav.subs" => "Subscriptions",
        "nav.settings" => "Settings",
        "nav.home" => "← Back to Home",
        "nav.subLabel" => "Subscription:",
        "nav.weekly" => "Weekly Remaining:",
        "lang.tr" => "Türkçe",
        "lang.en" => "English",
        "lang.es" => "Español",
        "lang.fr" => "Français",
        "products.add" => "Add New Product",
        "products.login_required" => "Sign in or sign up to add products",
        "products.add_requires_login" => "Please sign in to add a product",
        "login.title" => "🔐 Login",
        "login.subtitle" => "Sign in to your account",
        "signup.title" => "📝 Create Account",
        "signup.subtitle" => "Start with the free plan",
        "btn.login" => "Login",
        "btn.signup" => "Create Account",
        "settings.title" => "⚙️ Settings",
        "settings.subtitle" => "Update your account",
        "settings.account" => "Account",
        "settings.language" => "Language",
        "settings.userLabel" => "User:",
        "settings.accountNote" => "You must be signed in to change display name.",
        "settings.displayLabel" => "Display Name",
        "settings.passwordLabel" => "New Password (optional)",
        "settings.addressLabel" => "Store Address",
        "settings.addressPlaceholder" => "Enter store address",
        "settings.avatarLabel" => "Profile Image",
        "remove_avatar" => "Remove Image",
        "settings.interface" => "Interface",
        "settings.interfaceNote" => "Customize your interface (no dark/black theme).",
        "settings.themeLabel" => "Choose theme",
        "theme.light" => "Light (default)",
        "theme.dark" => "Dark",
        "save" => "Save",
        "settings_saved" => "Settings saved",
        "account_saved" => "Account settings saved",
        "confirm_delete_product" => "Are you sure you want to delete this product?",
        "delete_all_confirm" => "Delete ALL products?",
        "product_deleted" => "Product deleted",
        "critical.title" => "Critical",
        "critical.none" => "No critical products",
        "critical.label" => "Critical",
        "ok.label" => "OK",
        "login_wrong" => "Username or password is incorrect",
        "signup_user_taken" => "That username is already taken",
        "username_password_required" => "Username and password are required",
        "account_changes_require_login" => "Please sign in to change account settings",
        "greeting" => "Welcome,",
        "logout" => "Logout",
        _ => return None,
    })
}

fn lookup_es(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.title" => "🏪 Inventario de Tienda",
        "nav.subtitle" => "Administra tu inventario fácilmente",
        "nav.login" => "Iniciar Sesión",
        "nav.signup" => "Registrarse",
        "nav.subs" => "Suscripciones",
        "nav.settings" => "Ajustes",
        "nav.home" => "← Volver al Inicio",
        "nav.subLabel" => "Suscripción:",
        "nav.weekly" => "Restante Semanal:",
        "lang.tr" => "Türkçe",
        "lang.en" => "English",
        "lang.es" => "Español",
        "lang.fr" => "Français",
        "products.add" => "Agregar Producto",
        "products.login_required" => "Inicie sesión o regístrese para agregar productos",
        "products.add_requires_login" => "Por favor, inicie sesión para agregar un producto",
        "login.title" => "🔐 Iniciar Sesión",
        "login.subtitle" => "Ingrese a su cuenta",
        "signup.title" => "📝 Crear Cuenta",
        "signup.subtitle" => "Comience con el plan gratuito",
        "btn.login" => "Ingresar",
        "btn.signup" => "Crear Cuenta",
        "settings.title" => "⚙️ Ajustes",
        "settings.subtitle" => "Actualiza tu cuenta",
        "settings.account" => "Cuenta",
        "settings.language" => "Idioma",
        "settings.userLabel" => "Usuario:",
        "settings.accountNote" => "Debe iniciar sesión para cambiar el nombre visible.",
        "settings.displayLabel" => "Nombre Visible",
        "settings.passwordLabel" => "Nueva Contraseña (opcional)",
        "settings.addressLabel" => "Dirección de la tienda",
        "settings.addressPlaceholder" => "Introduce la dirección de la tienda",
        "settings.avatarLabel" => "Imagen de Perfil",
        "remove_avatar" => "Eliminar imagen",
        "settings.interface" => "Interfaz",
        "settings.interfaceNote" => "Personaliza tu interfaz (sin tema negro).",
        "settings.themeLabel" => "Seleccionar tema",
        "theme.light" => "Claro (predeterminado)",
        "theme.dark" => "Oscuro",
        "save" => "Guardar",
        "settings_saved" => "Ajustes guardados",
        "account_saved" => "Ajustes de cuenta guardados",
        "confirm_delete_product" => "¿Seguro que quieres eliminar este producto?",
        "delete_all_confirm" => "¿Eliminar TODOS los productos?",
        "product_deleted" => "Producto eliminado",
        "critical.title" => "Crítico",
        "critical.none" => "No hay productos críticos",
        "critical.label" => "Crítico",
        "ok.label" => "Bien",
        "login_wrong" => "Usuario o contraseña incorrectos",
        "signup_user_taken" => "Ese nombre de usuario ya existe",
        "username_password_required" => "Usuario y contraseña requeridos",
        "account_changes_require_login" => "Inicie sesión para cambiar la cuenta",
        "greeting" => "Bienvenido,",
        "logout" => "Cerrar Sesión",
        _ => return None,
    })
}

fn lookup_fr(key: &str) -> Option<&'static str> {
    Some(match key {
        "nav.title" => "🏪 Gestion de Stock",
        "nav.subtitle" => "Gérez votre inventaire facilement",
        "nav.login" => "Connexion",
        "nav.signup" => "S’inscrire",
        "nav.subs" => "Abonnements",
        "nav.settings" => "Paramètres",
        "nav.home" => "← Retour à l’accueil",
        "nav.subLabel" => "Abonnement:",
        "nav.weekly" => "Restant Hebdomadaire:",
        "lang.tr" => "Türkçe",
        "lang.en" => "English",
        "lang.es" => "Español",
        "lang.fr" => "Français",
        "products.add" => "Ajouter un produit",
        "products.login_required" => "Connectez-vous ou inscrivez-vous pour ajouter des produits",
        "products.add_requires_login" => "Veuillez vous connecter pour ajouter un produit",
        "login.title" => "🔐 Connexion",
        "login.subtitle" => "Connectez-vous à votre compte",
        "signup.title" => "📝 Créer un compte",
        "signup.subtitle" => "Commencez avec le forfait gratuit",
        "btn.login" => "Connexion",
        "btn.signup" => "Créer un compte",
        "settings.title" => "⚙️ Paramètres",
        "settings.subtitle" => "Mettez à jour votre compte",
        "settings.account" => "Compte",
        "settings.language" => "Langue",
        "settings.userLabel" => "Utilisateur:",
        "settings.accountNote" => "Vous devez être connecté pour changer le nom affiché.",
        "settings.displayLabel" => "Nom d'affichage",
        "settings.passwordLabel" => "Nouveau mot de passe (optionnel)",
        "settings.addressLabel" => "Adresse du magasin",
        "settings.addressPlaceholder" => "Entrez l'adresse du magasin",
        "settings.avatarLabel" => "Image de profil",
        "remove_avatar" => "Supprimer l'image",
        "settings.interface" => "Interface",
        "settings.interfaceNote" => "Personnalisez l'interface (pas de thème noir).",
        "settings.themeLabel" => "Choisir le thème",
        "theme.light" => "Clair (par défaut)",
        "theme.dark" => "Sombre",
        "save" => "Enregistrer",
        "settings_saved" => "Paramètres enregistrés",
        "account_saved" => "Paramètres du compte enregistrés",
        "confirm_delete_product" => "Voulez-vous vraiment supprimer ce produit ?",
        "delete_all_confirm" => "Supprimer TOUS les produits ?",
        "product_deleted" => "Produit supprimé",
        "critical.title" => "Critique",
        "critical.none" => "Aucun produit critique",
        "critical.label" => "Critique",
        "ok.label" => "OK",
        "login_wrong" => "Nom d’utilisateur ou mot de passe incorrect",
        "signup_user_taken" => "Ce nom d’utilisateur est déjà pris",
        "username_password_required" => "Nom d’utilisateur et mot de passe requis",
        "account_changes_require_login" => "Veuillez vous connecter pour modifier le compte",
        "greeting" => "Bienvenue,",
        "logout" => "Déconnexion",
        _ => return None,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_translates_active_language() {
        assert_eq!(translate(Language::En, "product_deleted"), "Product deleted");
        assert_eq!(translate(Language::Fr, "save"), "Enregistrer");
    }

    #[test]
    fn test_default_language_is_turkish() {
        assert_eq!(Language::default(), Language::Tr);
        assert_eq!(translate(Language::Tr, "product_deleted"), "Ürün silindi");
    }

    #[test]
    fn test_missing_key_falls_back_to_turkish() {
        // Only the Turkish table carries the soft theme label.
        assert_eq!(translate(Language::En, "theme.soft"), "Yumuşak");
    }

    #[test]
    fn test_table_strings_kept_verbatim() {
        // The tables are carried-over data; edits would drift the UI text.
        assert_eq!(
            translate(Language::Es, "settings.interfaceNote"),
            "Personaliza tu interfaz (sin tema negro)."
        );
        assert_eq!(
            translate(Language::En, "settings.interfaceNote"),
            "Customize your interface (no dark/black theme)."
        );
    }

    #[test]
    fn test_unknown_key_returned_verbatim() {
        assert_eq!(translate(Language::Es, "no.such.key"), "no.such.key");
    }

    #[test]
    fn test_language_codes_roundtrip_through_serde() {
        for lang in [Language::Tr, Language::En, Language::Es, Language::Fr] {
            let json = serde_json::to_string(&lang).unwrap();
            assert_eq!(json, format!("\"{}\"", lang.as_str()));
            let back: Language = serde_json::from_str(&json).unwrap();
            assert_eq!(back, lang);
        }
    }
}
